use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::table::{area_routes, Area};

/// Navigation for one console area
#[component]
pub fn Sidebar(area: Area) -> impl IntoView {
    let heading = match area {
        Area::Owner => "Owner",
        Area::Admin => "Admin Cabang",
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__heading">{heading}</div>
            <ul class="sidebar__list">
                {area_routes(area)
                    .map(|route| {
                        view! {
                            <li class="sidebar__item">
                                <A href=route.path>{route.title}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
