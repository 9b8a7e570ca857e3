use contracts::domain::brand::Brand;
use contracts::domain::product::Product;
use leptos::prelude::*;

use super::product_form::ProductFormFields;
use crate::catalog::ProductForm;
use crate::shared::modal::Modal;

#[component]
fn SubmitErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <div class="error-message" style="padding: 8px 12px; background: #ffebee; border: 1px solid #ffcdd2; border-radius: 4px; color: #c62828; margin-bottom: 10px;">
                    {err}
                </div>
            }
        })
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductCreateModal(
    #[prop(into)] brands: Signal<Vec<Brand>>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<ProductForm>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(ProductForm::default());

    view! {
        <Modal title={"Create Product".to_string()} on_close=on_close>
            <SubmitErrorMessage error=error />
            <ProductFormFields form=form brands=brands readonly=busy />
            <div class="modal-footer" style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 14px;">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    prop:disabled=move || busy.get()
                    on:click=move |_| on_submit.run(form.get_untracked())
                >
                    {move || if busy.get() { "Saving..." } else { "Create" }}
                </button>
            </div>
        </Modal>
    }
}

/// Detail dialog: read-only until "Edit" is pressed; delete asks once more
/// before it fires.
#[component]
#[allow(non_snake_case)]
pub fn ProductDetailModal(
    product: Product,
    #[prop(into)] brands: Signal<Vec<Brand>>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<ProductForm>,
    on_delete: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let original = StoredValue::new(product);
    let initial = move || original.with_value(|p| ProductForm::from_product(p, &brands.get_untracked()));
    let form = RwSignal::new(initial());
    let (editing, set_editing) = signal(false);
    let (confirming_delete, set_confirming_delete) = signal(false);

    // Бренды могут прийти позже, чем открылся диалог
    Effect::new(move |_| {
        brands.track();
        if !editing.get_untracked() {
            form.set(initial());
        }
    });

    let cancel_edit = move |_| {
        form.set(initial());
        set_editing.set(false);
    };

    let title = Signal::derive(move || original.with_value(|p| format!("Product: {}", p.name)));

    view! {
        <Modal title=title on_close=on_close>
            <SubmitErrorMessage error=error />
            <ProductFormFields
                form=form
                brands=brands
                readonly=Signal::derive(move || !editing.get() || busy.get())
            />
            <div class="modal-footer" style="display: flex; justify-content: space-between; gap: 8px; margin-top: 14px;">
                <div style="display: flex; gap: 8px; align-items: center;">
                    <Show
                        when=move || confirming_delete.get()
                        fallback=move || view! {
                            <button
                                class="button button--danger"
                                prop:disabled=move || busy.get() || editing.get()
                                on:click=move |_| set_confirming_delete.set(true)
                            >
                                "Delete"
                            </button>
                        }
                    >
                        <span style="font-size: 13px;">"Delete this product?"</span>
                        <button
                            class="button button--danger"
                            prop:disabled=move || busy.get()
                            on:click=move |_| {
                                set_confirming_delete.set(false);
                                on_delete.run(());
                            }
                        >
                            "Yes, delete"
                        </button>
                        <button class="button button--secondary" on:click=move |_| set_confirming_delete.set(false)>
                            "No"
                        </button>
                    </Show>
                </div>
                <div style="display: flex; gap: 8px;">
                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            <button class="button button--secondary" on:click=move |_| on_close.run(())>
                                "Close"
                            </button>
                            <button
                                class="button button--primary"
                                on:click=move |_| {
                                    set_confirming_delete.set(false);
                                    set_editing.set(true);
                                }
                            >
                                "Edit"
                            </button>
                        }
                    >
                        <button class="button button--secondary" on:click=cancel_edit>
                            "Cancel"
                        </button>
                        <button
                            class="button button--primary"
                            prop:disabled=move || busy.get()
                            on:click=move |_| on_submit.run(form.get_untracked())
                        >
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </Show>
                </div>
            </div>
        </Modal>
    }
}
