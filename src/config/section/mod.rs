//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitedoc.toml`:
//!
//! | Module   | TOML Section  | Purpose                              |
//! |----------|---------------|--------------------------------------|
//! | `site`   | `[site]`      | Title, URLs, deployment identity     |
//! | `i18n`   | `[i18n]`      | Locales                              |
//! | `docs`   | `[docs]`      | Doc sources, sidebar, route base     |
//! | `navbar` | `[navbar]`    | Top navigation                       |
//! | `footer` | `[footer]`    | Footer link columns                  |
//! | `theme`  | `[theme]`     | Styling, prism highlighting          |
//! | `search` | `[search]`    | Search-index integration             |
//! | `link`   | (shared)      | Link descriptors for navbar/footer   |

mod docs;
mod footer;
mod i18n;
mod link;
pub mod navbar;
mod search;
mod site;
mod theme;

pub use docs::DocsConfig;
pub use footer::{FooterConfig, FooterSection, FooterStyle};
pub use i18n::I18nConfig;
pub use link::{LinkItem, LinkPosition, LinkTarget};
pub use navbar::{LogoConfig, NavbarConfig};
pub use search::SearchConfig;
pub use site::{BrokenLinkAction, SiteSectionConfig};
pub use theme::{PrismConfig, ThemeConfig};
