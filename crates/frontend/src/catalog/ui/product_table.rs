use contracts::domain::product::{Product, ProductId};
use leptos::prelude::*;

/// Цена в формате "$1,234.50"
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    let sign = if price < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}

#[component]
#[allow(non_snake_case)]
pub fn ProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] is_loading: Signal<bool>,
    on_select: Callback<ProductId>,
) -> impl IntoView {
    view! {
        <div class="table-container" style="overflow: auto; position: relative; margin-top: 10px;">
            {move || is_loading.get().then(|| view! {
                <div class="loading-spinner" style="position: absolute; top: 8px; right: 12px; font-size: 12px; color: #666;">
                    "Loading..."
                </div>
            })}
            <table class="table__data table--striped" style="width: 100%;">
                <thead>
                    <tr>
                        <th class="table__header-cell">"Name"</th>
                        <th class="table__header-cell">"Brand"</th>
                        <th class="table__header-cell text-right">"Price"</th>
                        <th class="table__header-cell text-right">"Quantity"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let items = products.get();
                        if items.is_empty() && !is_loading.get() {
                            return view! {
                                <tr>
                                    <td colspan="4" class="text-center" style="padding: 24px; color: #888;">
                                        "No products found."
                                    </td>
                                </tr>
                            }.into_any();
                        }
                        items.into_iter().map(|product| {
                            let id = product.id;
                            view! {
                                <tr style="cursor: pointer;" on:click=move |_| on_select.run(id)>
                                    <td class="cell-truncate">{product.name}</td>
                                    <td class="cell-truncate">{product.brand.name}</td>
                                    <td class="text-right">{format_price(product.price)}</td>
                                    <td class="text-right">{product.quantity}</td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(49.9), "$49.90");
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_price(-12.0), "-$12.00");
    }
}
