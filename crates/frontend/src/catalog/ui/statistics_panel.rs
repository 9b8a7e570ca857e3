use contracts::dashboards::brand_statistics::BrandProductCount;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, Credential};
use crate::catalog::statistics::{highest, lowest, BrandStatistics, StatisticsView};
use crate::shared::icons::icon;

/// Bar width in percent of the largest count in view.
fn bar_width(count: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / max as f64
}

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card" style="background: white; border-radius: 6px; padding: 10px 14px; box-shadow: 0 1px 2px rgba(0,0,0,0.08); min-width: 160px;">
            <div style="font-size: 11px; color: #666; text-transform: uppercase;">{label}</div>
            <div style="font-size: 1.2rem; font-weight: 600;">{move || value.get()}</div>
        </div>
    }
}

fn describe(row: Option<&BrandProductCount>) -> String {
    row.map(|r| format!("{} ({})", r.brand_name, r.product_count))
        .unwrap_or_else(|| "-".to_string())
}

/// Product count per brand with All / Top 5 views.
#[component]
#[allow(non_snake_case)]
pub fn ProductStatistics(credential: Option<Credential>) -> impl IntoView {
    let credential = StoredValue::new(credential);
    let stats = RwSignal::new(BrandStatistics::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let view_mode = RwSignal::new(StatisticsView::All);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = ApiClient::from_env(credential.get_value());
        spawn_local(async move {
            match client.fetch_brand_statistics().await {
                Ok(rows) => stats.set(BrandStatistics::new(rows)),
                Err(e) => {
                    log::warn!("failed to load brand statistics: {}", e);
                    set_error.set(Some(format!("Failed to load statistics: {}", e.user_message())));
                }
            }
            set_loading.set(false);
        });
    };

    // Загрузка при монтировании
    Effect::new(move |_| load());

    let rows = Memo::new(move |_| stats.with(|s| s.view(view_mode.get())));

    view! {
        <div class="product-statistics" style="padding: 12px;">
            <div style="display: flex; gap: 8px; align-items: center; margin-bottom: 10px;">
                <select
                    class="form__select"
                    prop:value=move || view_mode.get().key()
                    on:change=move |ev| view_mode.set(StatisticsView::from_key(&event_target_value(&ev)))
                >
                    {StatisticsView::ALL.into_iter().map(|v| view! {
                        <option value={v.key()}>{v.label()}</option>
                    }).collect_view()}
                </select>
                <button
                    class="button button--secondary"
                    prop:disabled=move || loading.get()
                    on:click=move |_| load()
                >
                    {icon("refresh")}
                    " Refresh"
                </button>
            </div>

            {move || error.get().map(|err| view! {
                <div class="error-message" style="padding: 12px; background: #ffebee; border: 1px solid #ffcdd2; border-radius: 4px; color: #c62828; margin: 10px 0;">{err}</div>
            })}

            <div style="display: flex; gap: 10px; flex-wrap: wrap; margin-bottom: 14px;">
                <StatCard
                    label="Total products"
                    value=Signal::derive(move || stats.with(|s| s.total_products().to_string()))
                />
                <StatCard
                    label="Brands"
                    value=Signal::derive(move || stats.with(|s| s.total_brands().to_string()))
                />
                <StatCard
                    label="Most products"
                    value=Signal::derive(move || rows.with(|r| describe(highest(r))))
                />
                <StatCard
                    label="Fewest products"
                    value=Signal::derive(move || rows.with(|r| describe(lowest(r))))
                />
            </div>

            {move || {
                let rows = rows.get();
                if rows.is_empty() {
                    let message = if loading.get() { "Loading..." } else { "No data." };
                    return view! { <div style="color: #888;">{message}</div> }.into_any();
                }
                let max = rows.iter().map(|r| r.product_count).max().unwrap_or(0);
                view! {
                    <div class="bar-chart" style="display: flex; flex-direction: column; gap: 6px;">
                        {rows.into_iter().map(|row| {
                            let width = bar_width(row.product_count, max);
                            view! {
                                <div style="display: flex; align-items: center; gap: 8px;">
                                    <span style="width: 140px; font-size: 13px;" class="cell-truncate">{row.brand_name}</span>
                                    <div style="flex: 1; background: #edf2f7; border-radius: 3px; height: 16px;">
                                        <div style={format!("width: {:.1}%; background: #4a5568; height: 100%; border-radius: 3px;", width)}></div>
                                    </div>
                                    <span style="width: 40px; text-align: right; font-size: 13px;">{row.product_count}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(5, 10), 50.0);
        assert_eq!(bar_width(10, 10), 100.0);
        assert_eq!(bar_width(0, 0), 0.0);
    }

    #[test]
    fn test_describe() {
        let row = BrandProductCount {
            brand_name: "Dell".into(),
            product_count: 9,
        };
        assert_eq!(describe(Some(&row)), "Dell (9)");
        assert_eq!(describe(None), "-");
    }
}
