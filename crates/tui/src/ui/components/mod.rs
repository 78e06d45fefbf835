//! UI components: navigation sidebar and route content.

pub(crate) mod component;
pub(crate) mod content;
pub(crate) mod sidebar;

pub(crate) use component::Component;
pub(crate) use content::ContentComponent;
pub(crate) use sidebar::SidebarComponent;
