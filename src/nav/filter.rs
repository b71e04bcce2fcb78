//! Navigation tree filter
//! Prunes the static sidebar down to the nodes a role set may see. Purely
//! derives a new tree; the input is never mutated and the sibling order of
//! surviving nodes is preserved.

use crate::auth::role::Role;
use crate::nav::tree::{NavGroup, NavItem, NavLink, NavMenu};
use crate::rbac::permissions::has_role;

/// Per-node visibility rule: an absent gate admits any authenticated
/// identity, a present gate requires a role intersection. An explicitly
/// empty gate therefore admits nobody.
fn node_visible(user_roles: &[Role], gate: Option<&[Role]>) -> bool {
    match gate {
        None => true,
        Some(allowed) => has_role(user_roles, allowed),
    }
}

fn filter_menu(menu: &NavMenu, user_roles: &[Role]) -> Option<NavMenu> {
    if !node_visible(user_roles, menu.allowed_roles.as_deref()) {
        return None;
    }

    let surviving: Vec<NavLink> = menu
        .items
        .iter()
        .filter(|sub| node_visible(user_roles, sub.allowed_roles.as_deref()))
        .cloned()
        .collect();

    // A collapsible menu with nothing left inside is a dead end and is
    // dropped even though its own gate passed
    if surviving.is_empty() {
        return None;
    }

    Some(NavMenu {
        title: menu.title.clone(),
        icon: menu.icon.clone(),
        allowed_roles: menu.allowed_roles.clone(),
        items: surviving,
    })
}

fn filter_item(item: &NavItem, user_roles: &[Role]) -> Option<NavItem> {
    match item {
        NavItem::Link(link) => node_visible(user_roles, link.allowed_roles.as_deref())
            .then(|| NavItem::Link(link.clone())),
        NavItem::Menu(menu) => filter_menu(menu, user_roles).map(NavItem::Menu),
    }
}

/// Derive the sidebar visible to a role set.
///
/// An empty role set sees no navigation at all. Groups whose items were all
/// pruned disappear with them.
pub fn filter_nav_tree(tree: &[NavGroup], user_roles: &[Role]) -> Vec<NavGroup> {
    if user_roles.is_empty() {
        return Vec::new();
    }

    tree.iter()
        .filter_map(|group| {
            let items: Vec<NavItem> = group
                .items
                .iter()
                .filter_map(|item| filter_item(item, user_roles))
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(NavGroup { title: group.title.clone(), items })
            }
        })
        .collect()
}
