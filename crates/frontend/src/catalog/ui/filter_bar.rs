use contracts::domain::brand::Brand;
use contracts::shared::filter::FilterPredicate;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Parse a price bound typed into the filter bar.
///
/// Empty or unparseable input leaves the bound open; negative input is
/// clamped to zero.
pub fn parse_price_bound(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.max(0.0))
}

/// Поля фильтра в том виде, как их ввёл пользователь
#[derive(Debug, Clone, Default, PartialEq)]
struct FilterInputs {
    name: String,
    brand: String,
    min_price: String,
    max_price: String,
}

impl FilterInputs {
    fn to_predicate(&self) -> FilterPredicate {
        FilterPredicate {
            name: self.name.clone(),
            brand: self.brand.clone(),
            min_price: parse_price_bound(&self.min_price),
            max_price: parse_price_bound(&self.max_price),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn FilterBar(
    #[prop(into)] brands: Signal<Vec<Brand>>,
    /// Bumped by the owner whenever the applied filter went back to default
    #[prop(into)]
    reset_epoch: Signal<u32>,
    on_apply: Callback<FilterPredicate>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let inputs = RwSignal::new(FilterInputs::default());

    Effect::new(move |_| {
        reset_epoch.track();
        inputs.set(FilterInputs::default());
    });

    let apply = move || on_apply.run(inputs.get_untracked().to_predicate());
    let on_key = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            apply();
        }
    };

    view! {
        <div class="filter-bar" style="display: flex; gap: 8px; align-items: center; flex-wrap: wrap; margin: 10px 0;">
            <input
                type="text"
                class="form__input"
                placeholder="Search by name"
                prop:value=move || inputs.with(|i| i.name.clone())
                on:input=move |ev| inputs.update(|i| i.name = event_target_value(&ev))
                on:keydown=on_key
            />
            <select
                class="form__select"
                prop:value=move || inputs.with(|i| i.brand.clone())
                on:change=move |ev| inputs.update(|i| i.brand = event_target_value(&ev))
            >
                <option value="">"All Brands"</option>
                {move || brands.get().into_iter().map(|brand| {
                    let value = brand.name.clone();
                    view! { <option value=value>{brand.name}</option> }
                }).collect_view()}
            </select>
            <input
                type="number"
                min="0"
                step="0.01"
                class="form__input"
                style="width: 110px;"
                placeholder="Min price"
                prop:value=move || inputs.with(|i| i.min_price.clone())
                on:input=move |ev| inputs.update(|i| i.min_price = event_target_value(&ev))
                on:keydown=on_key
            />
            <input
                type="number"
                min="0"
                step="0.01"
                class="form__input"
                style="width: 110px;"
                placeholder="Max price"
                prop:value=move || inputs.with(|i| i.max_price.clone())
                on:input=move |ev| inputs.update(|i| i.max_price = event_target_value(&ev))
                on:keydown=on_key
            />
            <button class="button button--primary" on:click=move |_| apply()>
                "Apply"
            </button>
            <button
                class="button button--secondary"
                on:click=move |_| {
                    inputs.set(FilterInputs::default());
                    on_reset.run(());
                }
            >
                {icon("x")}
                " Reset"
            </button>
        </div>
    }
}
