//! Console route surface
//!
//! Every page lives under `/owner/...` (multi-branch, owner-area roles) or
//! `/admin/...` (single branch, admin-area roles). `/` and anything unknown
//! resolve through the role redirector.

use crate::system::auth::guard::{avoid_self_redirect, guarded_decision, root_decision, GuardDecision};
use crate::system::auth::roles::{RoleSet, ADMIN_AREA, OWNER_AREA};
use crate::system::auth::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const OWNER_LANDING: &str = "/owner/dashboard";
pub const ADMIN_LANDING: &str = "/admin/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Owner,
    Admin,
}

impl Area {
    pub fn roles(self) -> RoleSet {
        match self {
            Area::Owner => OWNER_AREA,
            Area::Admin => ADMIN_AREA,
        }
    }
}

/// A guarded console page and the backend endpoint it lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleRoute {
    pub path: &'static str,
    pub title: &'static str,
    pub endpoint: &'static str,
    pub area: Area,
}

const fn owner(path: &'static str, title: &'static str, endpoint: &'static str) -> ConsoleRoute {
    ConsoleRoute {
        path,
        title,
        endpoint,
        area: Area::Owner,
    }
}

const fn admin(path: &'static str, title: &'static str, endpoint: &'static str) -> ConsoleRoute {
    ConsoleRoute {
        path,
        title,
        endpoint,
        area: Area::Admin,
    }
}

pub const CONSOLE_ROUTES: &[ConsoleRoute] = &[
    owner(OWNER_LANDING, "Dashboard", "/dashboard"),
    owner("/owner/branches", "Cabang", "/branches"),
    owner("/owner/products", "Produk", "/products"),
    owner("/owner/categories", "Kategori", "/categories"),
    owner("/owner/users", "Pengguna", "/users"),
    owner("/owner/roles", "Role", "/roles"),
    owner("/owner/finance", "Keuangan", "/finance"),
    owner("/owner/expenses", "Pengeluaran", "/expenses"),
    owner("/owner/debt", "Hutang", "/debt"),
    owner("/owner/cash-bank", "Kas & Bank", "/cash-bank-transactions"),
    owner("/owner/inventory-movement", "Mutasi Stok", "/inventory-movement"),
    owner("/owner/branch-inventory", "Stok Cabang", "/branch-inventory"),
    owner("/owner/sales-reports", "Laporan Penjualan", "/sales-reports/summary"),
    owner("/owner/purchase-reports", "Laporan Pembelian", "/purchases-reports/summary"),
    owner("/owner/distributors", "Distributor", "/distributors"),
    admin(ADMIN_LANDING, "Dashboard", "/dashboard"),
    admin("/admin/products", "Produk", "/products"),
    admin("/admin/branch-inventory", "Stok Cabang", "/branch-inventory"),
    admin("/admin/inventory-movement", "Mutasi Stok", "/inventory-movement"),
    admin("/admin/sales-reports", "Laporan Penjualan", "/sales-reports/summary"),
    admin("/admin/purchase-reports", "Laporan Pembelian", "/purchases-reports/summary"),
    admin("/admin/expenses", "Pengeluaran", "/expenses"),
    admin("/admin/distributors", "Distributor", "/distributors"),
];

/// Path without query, fragment or trailing slash
pub fn canonical_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

pub fn find_route(path: &str) -> Option<&'static ConsoleRoute> {
    let path = canonical_path(path);
    CONSOLE_ROUTES.iter().find(|r| r.path == path)
}

/// Routes visible in the sidebar for an area
pub fn area_routes(area: Area) -> impl Iterator<Item = &'static ConsoleRoute> {
    CONSOLE_ROUTES.iter().filter(move |r| r.area == area)
}

/// What navigating to `path` does for `session`
pub fn resolve(path: &str, session: &Session) -> GuardDecision {
    let path = canonical_path(path);
    if path == LOGIN_PATH {
        return GuardDecision::Allow;
    }
    let decision = match find_route(path) {
        Some(route) => guarded_decision(session, route.area.roles(), None),
        None => root_decision(session),
    };
    avoid_self_redirect(decision, path)
}
