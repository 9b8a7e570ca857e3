use crate::catalog::ui::ProductDashboard;
use crate::system::auth::guard::RequireAdmin;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAdmin>
            <ProductDashboard />
        </RequireAdmin>
    }
}
