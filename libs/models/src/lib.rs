#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Typed models for a slice of the Microsoft Graph beta surface.
//!
//! Every model follows one shape: private fields with accessor pairs, a
//! static field-deserializer table consulted by
//! [`Parsable::apply_field`](graphbeta_wire::Parsable::apply_field), and a
//! serializer writing set fields plus preserved additional data. Inheritance
//! in the Graph metadata becomes composition here: a [`SitePage`] holds a
//! [`BaseItem`] which holds an [`Entity`], and field application chains
//! through the bases.
//!
//! Abstract Graph types are materialized as `Any*` unions resolved from the
//! `@odata.type` discriminator: [`AnyEntity`] for the crate-wide registry,
//! [`AnyWebPart`] and [`ediscovery::AnyDataSource`] for their hierarchies.
//!
//! ```
//! use graphbeta_models::{GraphEntity, SitePage};
//!
//! let page: SitePage = graphbeta_wire::from_str(
//!     r##"{"@odata.type": "#microsoft.graph.sitePage", "title": "Home"}"##,
//! )?;
//! assert_eq!(page.title(), Some("Home"));
//! assert_eq!(page.odata_type(), Some("#microsoft.graph.sitePage"));
//! # Ok::<(), graphbeta_wire::Error>(())
//! ```

mod any_entity;
mod base_item;
mod entity;
mod identity;
mod item_reference;
mod macros;
mod site;
mod site_page;
mod web_part;

pub mod ediscovery;
pub mod identitygovernance;
pub mod managedtenants;
pub mod search;
pub mod tenantadmin;

pub use any_entity::AnyEntity;
pub use base_item::BaseItem;
pub use entity::{Entity, GraphEntity};
pub use identity::{Identity, IdentitySet, User};
pub use item_reference::{ItemReference, SharepointIds};
pub use site::{Deleted, Root, Site, SiteCollection, SiteSettings};
pub use site_page::{
    CanvasLayout, HorizontalSection, HorizontalSectionColumn, HorizontalSectionLayoutType,
    PageLayoutType, PagePromotionType, PublicationFacet, ReactionsFacet, SectionEmphasisType,
    SitePage, TitleArea, TitleAreaLayoutType, TitleAreaTextAlignmentType, VerticalSection,
};
pub use web_part::{AnyWebPart, StandardWebPart, TextWebPart, WebPartData};
