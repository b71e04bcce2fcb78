//! Sidebar navigation definition
//! Static tree of groups and items, each node optionally gated by roles.
//! The nesting limit (group -> item -> sub-item) is enforced by the types:
//! menu sub-items are links, so a menu can never contain another menu.

use crate::auth::role::Role;
use once_cell::sync::Lazy;
use serde::Serialize;

/// A plain navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// `None` means visible to any authenticated identity; an explicit empty
    /// list means visible to nobody
    #[serde(skip_serializing)]
    pub allowed_roles: Option<Vec<Role>>,
}

/// A collapsible menu holding one level of sub-links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavMenu {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing)]
    pub allowed_roles: Option<Vec<Role>>,
    pub items: Vec<NavLink>,
}

/// One node of a navigation group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    Link(NavLink),
    Menu(NavMenu),
}

impl NavItem {
    pub fn title(&self) -> &str {
        match self {
            NavItem::Link(link) => &link.title,
            NavItem::Menu(menu) => &menu.title,
        }
    }
}

/// A titled section of the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub title: String,
    pub items: Vec<NavItem>,
}

fn link(title: &str, url: &str, icon: &str, allowed: Option<&[Role]>) -> NavItem {
    NavItem::Link(NavLink {
        title: title.to_string(),
        url: url.to_string(),
        icon: Some(icon.to_string()),
        allowed_roles: allowed.map(|roles| roles.to_vec()),
    })
}

fn sub_link(title: &str, url: &str, icon: &str, allowed: Option<&[Role]>) -> NavLink {
    NavLink {
        title: title.to_string(),
        url: url.to_string(),
        icon: Some(icon.to_string()),
        allowed_roles: allowed.map(|roles| roles.to_vec()),
    }
}

/// The full sidebar as shipped with the dashboard
pub fn sidebar() -> Vec<NavGroup> {
    use Role::*;

    vec![
        NavGroup {
            title: "General".to_string(),
            items: vec![
                link("Dashboard", "/", "layout-dashboard", Some(&[Admin, Manager])),
                // Solo admin
                link("Proveedores", "/customers", "user-cog", Some(&[Admin])),
                link("Talleres", "/workshops", "store", Some(&[Admin, Manager])),
                link("Clientes", "/all-clients", "users", Some(&[Admin, Manager])),
                link("Vehículos", "/all-vehicles", "car", Some(&[Admin, Manager])),
                link("Servicios", "/all-services", "wrench", Some(&[Admin, Manager])),
            ],
        },
        NavGroup {
            title: "Configuración".to_string(),
            items: vec![NavItem::Menu(NavMenu {
                title: "Configuración".to_string(),
                icon: Some("settings".to_string()),
                allowed_roles: Some(vec![Admin, Manager]),
                items: vec![
                    sub_link("Perfil", "/settings", "building-2", Some(&[Admin, Manager])),
                    sub_link("Cuenta", "/settings/account", "wrench", Some(&[Admin, Manager])),
                    sub_link(
                        "Apariencia",
                        "/settings/appearance",
                        "palette",
                        Some(&[Admin, Manager]),
                    ),
                    sub_link(
                        "Notificaciones",
                        "/settings/notifications",
                        "bell",
                        Some(&[Admin, Manager]),
                    ),
                    sub_link("Pantalla", "/settings/display", "monitor", Some(&[Admin, Manager])),
                ],
            })],
        },
    ]
}

/// Process-wide sidebar definition, built once and never mutated
pub static SIDEBAR: Lazy<Vec<NavGroup>> = Lazy::new(sidebar);
