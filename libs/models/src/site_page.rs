//! SharePoint site pages and their layout facets.

use graphbeta_wire::wire_enum;

use crate::macros::{graph_complex_model, graph_entity_model};
use crate::{AnyWebPart, BaseItem, Entity, IdentitySet};

wire_enum! {
    /// The name of the page layout of the page.
    pub enum PageLayoutType {
        MicrosoftReserved => "microsoftReserved",
        Article => "article",
        Home => "home",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    /// The promotion kind of a site page.
    pub enum PagePromotionType {
        MicrosoftReserved => "microsoftReserved",
        Page => "page",
        NewsPost => "newsPost",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    /// Background emphasis of a page section.
    pub enum SectionEmphasisType {
        None => "none",
        Neutral => "neutral",
        Soft => "soft",
        Strong => "strong",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    /// Column arrangement of a horizontal section.
    pub enum HorizontalSectionLayoutType {
        None => "none",
        OneColumn => "oneColumn",
        TwoColumns => "twoColumns",
        ThreeColumns => "threeColumns",
        OneThirdLeftColumn => "oneThirdLeftColumn",
        OneThirdRightColumn => "oneThirdRightColumn",
        FullWidth => "fullWidth",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    /// Rendering style of the title area.
    pub enum TitleAreaLayoutType {
        ImageAndTitle => "imageAndTitle",
        Plain => "plain",
        ColorBlock => "colorBlock",
        Overlap => "overlap",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    /// Text alignment in the title area.
    pub enum TitleAreaTextAlignmentType {
        Left => "left",
        Center => "center",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_complex_model! {
    /// The publishing status and version of a page.
    pub struct PublicationFacet {
        tag: "#microsoft.graph.publicationFacet",
        fields: {
            /// The user who checked out the document.
            checked_out_by/set_checked_out_by: obj(IdentitySet) => "checkedOutBy",
            /// The state of publication for the document: `published` or `checkout`.
            level/set_level: str() => "level",
            /// The unique identifier for the version that is visible to the current caller.
            version_id/set_version_id: str() => "versionId",
        }
    }
}

graph_complex_model! {
    /// Reaction counters for a page.
    pub struct ReactionsFacet {
        tag: "#microsoft.graph.reactionsFacet",
        fields: {
            /// Count of comments.
            comment_count/set_comment_count: i32() => "commentCount",
            /// Count of likes.
            like_count/set_like_count: i32() => "likeCount",
            /// Count of shares.
            share_count/set_share_count: i32() => "shareCount",
        }
    }
}

graph_complex_model! {
    /// The title area on a SharePoint page.
    pub struct TitleArea {
        tag: "#microsoft.graph.titleArea",
        fields: {
            /// Alternative text on the title area.
            alternative_text/set_alternative_text: str() => "alternativeText",
            /// Indicates whether the title area has a gradient effect enabled.
            enable_gradient_effect/set_enable_gradient_effect: bool() => "enableGradientEffect",
            /// URL of the image in the title area.
            image_web_url/set_image_web_url: str() => "imageWebUrl",
            /// Layout of the title area.
            layout/set_layout: enum_(TitleAreaLayoutType) => "layout",
            /// Indicates whether the author should be shown in the title area.
            show_author/set_show_author: bool() => "showAuthor",
            /// Indicates whether the published date should be shown in the title area.
            show_published_date/set_show_published_date: bool() => "showPublishedDate",
            /// Indicates whether the text block above the title should be shown.
            show_text_block_above_title/set_show_text_block_above_title: bool() => "showTextBlockAboveTitle",
            /// The text above the title.
            text_above_title/set_text_above_title: str() => "textAboveTitle",
            /// Alignment of the text in the title area.
            text_alignment/set_text_alignment: enum_(TitleAreaTextAlignmentType) => "textAlignment",
        }
    }
}

graph_entity_model! {
    /// One column in a horizontal section.
    pub struct HorizontalSectionColumn : Entity {
        tag: "#microsoft.graph.horizontalSectionColumn",
        fields: {
            /// The collection of web parts in this column.
            webparts/set_webparts: poly_coll(AnyWebPart, AnyWebPart::from_node) => "webparts",
            /// Width of the column.
            width/set_width: i32() => "width",
        }
    }
}

graph_entity_model! {
    /// A horizontal section of page content.
    pub struct HorizontalSection : Entity {
        tag: "#microsoft.graph.horizontalSection",
        fields: {
            /// The set of vertical columns in this section.
            columns/set_columns: coll(HorizontalSectionColumn) => "columns",
            /// Enumeration value that indicates the emphasis of the section background.
            emphasis/set_emphasis: enum_(SectionEmphasisType) => "emphasis",
            /// Layout type of the section.
            layout/set_layout: enum_(HorizontalSectionLayoutType) => "layout",
        }
    }
}

graph_entity_model! {
    /// The vertical section of page content.
    pub struct VerticalSection : Entity {
        tag: "#microsoft.graph.verticalSection",
        fields: {
            /// Enumeration value that indicates the emphasis of the section background.
            emphasis/set_emphasis: enum_(SectionEmphasisType) => "emphasis",
            /// The set of web parts in this section.
            webparts/set_webparts: poly_coll(AnyWebPart, AnyWebPart::from_node) => "webparts",
        }
    }
}

graph_entity_model! {
    /// Layout of the content on a page: horizontal sections plus an
    /// optional vertical section.
    pub struct CanvasLayout : Entity {
        tag: "#microsoft.graph.canvasLayout",
        fields: {
            /// Collection of horizontal sections on the SharePoint page.
            horizontal_sections/set_horizontal_sections: coll(HorizontalSection) => "horizontalSections",
            /// Vertical section on the SharePoint page.
            vertical_section/set_vertical_section: obj(VerticalSection) => "verticalSection",
        }
    }
}

graph_entity_model! {
    /// A page in the SitePages list of a site.
    pub struct SitePage : BaseItem {
        tag: "#microsoft.graph.sitePage",
        fields: {
            /// Layout of the content in this page, including horizontal sections and the vertical section.
            canvas_layout/set_canvas_layout: obj(CanvasLayout) => "canvasLayout",
            /// The name of the page layout of the page.
            page_layout/set_page_layout: enum_(PageLayoutType) => "pageLayout",
            /// The promotion kind of the site page.
            promotion_kind/set_promotion_kind: enum_(PagePromotionType) => "promotionKind",
            /// The publishing status and the MM.mm version of the page.
            publishing_state/set_publishing_state: obj(PublicationFacet) => "publishingState",
            /// Reactions information for the page.
            reactions/set_reactions: obj(ReactionsFacet) => "reactions",
            /// Determines whether or not to show comments at the bottom of the page.
            show_comments/set_show_comments: bool() => "showComments",
            /// Determines whether or not to show recommended pages at the bottom of the page.
            show_recommended_pages/set_show_recommended_pages: bool() => "showRecommendedPages",
            /// URL of the site page's thumbnail image.
            thumbnail_web_url/set_thumbnail_web_url: str() => "thumbnailWebUrl",
            /// Title of the site page.
            title/set_title: str() => "title",
            /// Title area on the SharePoint page.
            title_area/set_title_area: obj(TitleArea) => "titleArea",
            /// Collection of web parts on the SharePoint page.
            web_parts/set_web_parts: poly_coll(AnyWebPart, AnyWebPart::from_node) => "webParts",
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::GraphEntity;
    use graphbeta_wire::{from_value, to_value};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_page() -> serde_json::Value {
        json!({
            "@odata.type": "#microsoft.graph.sitePage",
            "id": "page-1",
            "name": "home.aspx",
            "title": "Home",
            "pageLayout": "home",
            "promotionKind": "page",
            "showComments": true,
            "showRecommendedPages": false,
            "publishingState": {"level": "published", "versionId": "1.0"},
            "reactions": {"commentCount": 2, "likeCount": 14},
            "titleArea": {
                "layout": "imageAndTitle",
                "showAuthor": true,
                "textAlignment": "left",
            },
            "canvasLayout": {
                "horizontalSections": [{
                    "id": "1",
                    "layout": "oneColumn",
                    "emphasis": "none",
                    "columns": [{
                        "id": "1",
                        "width": 12,
                        "webparts": [{
                            "@odata.type": "#microsoft.graph.textWebPart",
                            "id": "wp-1",
                            "innerHtml": "<h1>welcome</h1>",
                        }],
                    }],
                }],
            },
        })
    }

    #[test]
    fn test_parse_full_page() {
        let page: SitePage = from_value(&sample_page()).unwrap();
        assert_eq!(page.id(), Some("page-1"));
        assert_eq!(page.base().name(), Some("home.aspx"));
        assert_eq!(page.title(), Some("Home"));
        assert_eq!(page.page_layout(), Some(PageLayoutType::Home));
        assert_eq!(page.promotion_kind(), Some(PagePromotionType::Page));
        assert_eq!(page.show_comments(), Some(true));
        assert_eq!(
            page.publishing_state().and_then(PublicationFacet::level),
            Some("published")
        );
        assert_eq!(
            page.reactions().and_then(ReactionsFacet::like_count),
            Some(14)
        );
    }

    #[test]
    fn test_canvas_chain_resolves_web_parts() {
        let page: SitePage = from_value(&sample_page()).unwrap();
        let sections = page.canvas_layout().unwrap().horizontal_sections().unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].layout(), Some(HorizontalSectionLayoutType::OneColumn));

        let columns = sections[0].columns().unwrap();
        assert_eq!(columns[0].width(), Some(12));

        let AnyWebPart::Text(text) = &columns[0].webparts().unwrap()[0] else {
            panic!("expected a text web part");
        };
        assert_eq!(text.inner_html(), Some("<h1>welcome</h1>"));
    }

    #[test]
    fn test_page_round_trip() {
        let payload = sample_page();
        let page: SitePage = from_value(&payload).unwrap();
        let rendered = to_value(&page);
        assert_eq!(rendered.get("title"), payload.get("title"));
        assert_eq!(rendered.get("pageLayout"), payload.get("pageLayout"));
        // Complex types acquire their default type tag when re-serialized.
        assert_eq!(
            rendered.pointer("/publishingState/level"),
            payload.pointer("/publishingState/level")
        );
        assert_eq!(
            rendered.pointer("/canvasLayout/horizontalSections/0/columns/0/webparts/0/innerHtml"),
            payload.pointer("/canvasLayout/horizontalSections/0/columns/0/webparts/0/innerHtml")
        );
    }

    #[test]
    fn test_unknown_enum_value_is_an_error() {
        let err = from_value::<SitePage>(&json!({"pageLayout": "grid"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "field `pageLayout`: unknown value `grid` for PageLayoutType"
        );
    }
}
