//! Sidebar navigation model and role-based pruning

pub mod filter;
pub mod tree;

pub use filter::filter_nav_tree;
pub use tree::{NavGroup, NavItem, NavLink, NavMenu, SIDEBAR};
