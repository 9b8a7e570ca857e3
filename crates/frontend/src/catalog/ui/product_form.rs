use contracts::domain::brand::Brand;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

use crate::catalog::ProductForm;

/// Input fields shared by the create and detail dialogs.
#[component]
#[allow(non_snake_case)]
pub fn ProductFormFields(
    form: RwSignal<ProductForm>,
    #[prop(into)] brands: Signal<Vec<Brand>>,
    #[prop(into)] readonly: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form" style="display: flex; flex-direction: column; gap: 10px;">
            <label class="form__group">
                <span class="form__label">"Name"</span>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || form.with(|f| f.name.clone())
                    prop:disabled=move || readonly.get()
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </label>
            <label class="form__group">
                <span class="form__label">"Brand"</span>
                <select
                    class="form__select"
                    prop:value=move || form.with(|f| f.brand_id.clone())
                    prop:disabled=move || readonly.get()
                    on:change=move |ev| form.update(|f| f.brand_id = event_target_value(&ev))
                >
                    <option value="">"Select a brand"</option>
                    {move || brands.get().into_iter().map(|brand| {
                        let id = brand.id.as_string();
                        let selected_id = id.clone();
                        view! {
                            <option
                                value=id
                                selected=move || form.with(|f| f.brand_id == selected_id)
                            >
                                {brand.name}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <label class="form__group">
                <span class="form__label">"Quantity"</span>
                <input
                    type="number"
                    min="0"
                    step="1"
                    class="form__input"
                    prop:value=move || form.with(|f| f.quantity.clone())
                    prop:disabled=move || readonly.get()
                    on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                />
            </label>
            <label class="form__group">
                <span class="form__label">"Price"</span>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    class="form__input"
                    prop:value=move || form.with(|f| f.price.clone())
                    prop:disabled=move || readonly.get()
                    on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                />
            </label>
        </div>
    }
}
