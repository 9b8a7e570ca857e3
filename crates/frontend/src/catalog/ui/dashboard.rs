use std::rc::Rc;

use contracts::domain::product::ProductId;
use contracts::shared::filter::FilterPredicate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::filter_bar::FilterBar;
use super::product_modals::{ProductCreateModal, ProductDetailModal};
use super::product_table::ProductTable;
use super::statistics_panel::ProductStatistics;
use crate::api::{ApiClient, CatalogTransport};
use crate::catalog::{CatalogController, CatalogSnapshot, ModalBridge, ModalSelection, ProductForm};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::system::auth::context::{do_logout, use_auth};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Products,
    Statistics,
}

/// Admin product catalog: filter bar, paged table, create/detail dialogs
/// and brand statistics.
#[component]
#[allow(non_snake_case)]
pub fn ProductDashboard() -> impl IntoView {
    let auth_state = use_auth();
    let credential = auth_state.with_untracked(|s| s.credential.clone());

    // Реактивные зеркала состояния контроллера
    let snapshot = RwSignal::new(CatalogSnapshot::default());
    let selection = RwSignal::new(ModalSelection::Closed);
    let submit_error = RwSignal::new(None::<String>);
    let (submitting, set_submitting) = signal(false);
    let (filter_error, set_filter_error) = signal::<Option<String>>(None);
    let filter_epoch = RwSignal::new(0u32);
    let (tab, set_tab) = signal(DashboardTab::Products);

    let transport: Rc<dyn CatalogTransport> = Rc::new(ApiClient::from_env(credential));
    let controller = CatalogController::new(transport).with_observer(move |s| snapshot.set(s));
    let bridge = ModalBridge::new(controller.clone()).with_observer(move |s| {
        selection.set(s);
        submit_error.set(None);
    });
    let controller = StoredValue::new_local(controller);
    let bridge = StoredValue::new_local(bridge);

    spawn_local(async move {
        let controller = controller.get_value();
        controller.load_brands().await;
        controller.refresh().await;
    });

    let brands = Signal::derive(move || snapshot.with(|s| s.brands.clone()));

    let on_apply = Callback::new(move |candidate: FilterPredicate| {
        set_filter_error.set(None);
        spawn_local(async move {
            if let Err(e) = controller.get_value().apply_filter(candidate).await {
                set_filter_error.set(Some(e.to_string()));
                filter_epoch.update(|n| *n += 1);
            }
        });
    });

    let on_reset = Callback::new(move |_: ()| {
        set_filter_error.set(None);
        spawn_local(async move { controller.get_value().reset_filter().await });
    });

    let on_page_change = Callback::new(move |page: usize| {
        spawn_local(async move { controller.get_value().go_to_page(page).await });
    });

    let on_select = Callback::new(move |id: ProductId| {
        if !bridge.with_value(|b| b.open_view(id)) {
            log::debug!("product {} not opened, another dialog is open", id);
        }
    });

    let on_close = Callback::new(move |_: ()| bridge.with_value(|b| b.cancel()));

    let on_submit = Callback::new(move |form: ProductForm| {
        set_submitting.set(true);
        spawn_local(async move {
            let result = bridge.get_value().submit(&form).await;
            set_submitting.set(false);
            if let Err(e) = result {
                submit_error.set(Some(e.user_message()));
            }
        });
    });

    let on_delete = Callback::new(move |_: ()| {
        set_submitting.set(true);
        spawn_local(async move {
            let result = bridge.get_value().confirm_delete().await;
            set_submitting.set(false);
            if let Err(e) = result {
                submit_error.set(Some(e.user_message()));
            }
        });
    });

    let render_modal = move || match selection.get() {
        ModalSelection::Closed => ().into_any(),
        ModalSelection::CreatingNew => view! {
            <ProductCreateModal
                brands=brands
                error=submit_error
                busy=submitting
                on_submit=on_submit
                on_close=on_close
            />
        }
        .into_any(),
        ModalSelection::Viewing(id) => {
            let product =
                snapshot.with_untracked(|s| s.products.iter().find(|p| p.id == id).cloned());
            match product {
                Some(product) => view! {
                    <ProductDetailModal
                        product=product
                        brands=brands
                        error=submit_error
                        busy=submitting
                        on_submit=on_submit
                        on_delete=on_delete
                        on_close=on_close
                    />
                }
                .into_any(),
                None => view! {
                    <Modal title={format!("Product {}", id)} on_close=on_close>
                        <p>"This product is no longer in the list."</p>
                    </Modal>
                }
                .into_any(),
            }
        }
    };

    let tab_button = move |target: DashboardTab, label: &'static str| {
        view! {
            <button
                class=move || if tab.get() == target { "button button--primary" } else { "button button--secondary" }
                on:click=move |_| set_tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="product-dashboard" style="background: #f8f9fa; padding: 12px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
            <div style="background: linear-gradient(135deg, #4a5568 0%, #2d3748 100%); padding: 8px 12px; border-radius: 6px 6px 0 0; margin: -12px -12px 0 -12px; display: flex; align-items: center; justify-content: space-between;">
                <div style="display: flex; align-items: center; gap: 12px;">
                    <h2 style="margin: 0; font-size: 1.1rem; font-weight: 600; color: white; letter-spacing: 0.5px;">
                        {icon("products")}
                        " Product Catalog"
                    </h2>
                    {tab_button(DashboardTab::Products, "Products")}
                    {tab_button(DashboardTab::Statistics, "Statistics")}
                </div>
                <button class="button button--secondary" on:click=move |_| do_logout(auth_state)>
                    {icon("logout")}
                    " Logout"
                </button>
            </div>

            <Show
                when=move || tab.get() == DashboardTab::Products
                fallback=move || {
                    let credential = auth_state.with_untracked(|s| s.credential.clone());
                    view! { <ProductStatistics credential=credential /> }
                }
            >
                <div style="display: flex; align-items: center; justify-content: space-between; gap: 12px; flex-wrap: wrap;">
                    <FilterBar
                        brands=brands
                        reset_epoch=filter_epoch
                        on_apply=on_apply
                        on_reset=on_reset
                    />
                    <div style="display: flex; gap: 8px; align-items: center;">
                        <PaginationControls
                            current_page=Signal::derive(move || snapshot.with(|s| s.page))
                            total_pages=Signal::derive(move || snapshot.with(|s| s.total_pages))
                            total_count=Signal::derive(move || snapshot.with(|s| s.total_elements))
                            on_page_change=on_page_change
                        />
                        <button
                            class="button button--primary"
                            on:click=move |_| {
                                bridge.with_value(|b| b.open_create());
                            }
                        >
                            {icon("plus")}
                            " New Product"
                        </button>
                        <button
                            class="button button--secondary"
                            prop:disabled=move || snapshot.with(|s| s.is_loading)
                            on:click=move |_| spawn_local(async move { controller.get_value().refresh().await })
                        >
                            {icon("refresh")}
                            " Refresh"
                        </button>
                    </div>
                </div>

                {move || filter_error.get().map(|err| view! {
                    <div class="warning-message" style="padding: 8px 12px; background: #fff8e1; border: 1px solid #ffe082; border-radius: 4px; color: #8d6e00; margin: 6px 0;">{err}</div>
                })}
                {move || snapshot.with(|s| s.brands_error.clone()).map(|err| view! {
                    <div class="error-message" style="padding: 12px; background: #ffebee; border: 1px solid #ffcdd2; border-radius: 4px; color: #c62828; margin: 10px 0;">{err}</div>
                })}
                {move || snapshot.with(|s| s.list_error.clone()).map(|err| view! {
                    <div class="error-message" style="padding: 12px; background: #ffebee; border: 1px solid #ffcdd2; border-radius: 4px; color: #c62828; margin: 10px 0;">{err}</div>
                })}

                <ProductTable
                    products=Signal::derive(move || snapshot.with(|s| s.products.clone()))
                    is_loading=Signal::derive(move || snapshot.with(|s| s.is_loading))
                    on_select=on_select
                />
            </Show>

            {render_modal}
        </div>
    }
}
