//! Microsoft Search administrative answers.

use graphbeta_wire::wire_enum;

use crate::macros::{graph_complex_model, graph_entity_model};
use crate::{Entity, IdentitySet};

wire_enum! {
    /// Publication state of a search answer.
    pub enum AnswerState {
        Published => "published",
        Draft => "draft",
        Excluded => "excluded",
        UnknownFutureValue => "unknownFutureValue",
    }
}

wire_enum! {
    /// Device platforms an answer variation can target.
    pub enum DevicePlatformType {
        Android => "android",
        AndroidForWork => "androidForWork",
        Ios => "ios",
        MacOs => "macOS",
        WindowsPhone81 => "windowsPhone81",
        WindowsPhone81AndLater => "windowsPhone81AndLater",
        Windows10AndLater => "windows10AndLater",
        AndroidWorkProfile => "androidWorkProfile",
        Unknown => "unknown",
        AndroidAsop => "androidASOP",
        AndroidMobileApplicationManagement => "androidMobileApplicationManagement",
        IosMobileApplicationManagement => "iOSMobileApplicationManagement",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_entity_model! {
    /// Shared surface of administrative search answers.
    pub struct SearchAnswer : Entity {
        tag: "#microsoft.graph.search.searchAnswer",
        fields: {
            /// Search answer description shown on the search results page.
            description/set_description: str() => "description",
            /// Search answer name displayed in search results.
            display_name/set_display_name: str() => "displayName",
            /// Details of the user that created or last modified the search answer.
            last_modified_by/set_last_modified_by: obj(IdentitySet) => "lastModifiedBy",
            /// Timestamp of when the search answer is created or edited.
            last_modified_date_time/set_last_modified_date_time: datetime() => "lastModifiedDateTime",
            /// Search answer URL link. When users click this search answer in search results, they'll go to this URL.
            web_url/set_web_url: str() => "webUrl",
        }
    }
}

graph_complex_model! {
    /// Keywords that trigger an answer.
    pub struct AnswerKeyword {
        tag: "#microsoft.graph.search.answerKeyword",
        fields: {
            /// A collection of keywords used to trigger the search answer.
            keywords/set_keywords: str_coll() => "keywords",
            /// If true, indicates that the search term contains similar words to the keywords that should trigger the search answer.
            match_similar_keywords/set_match_similar_keywords: bool() => "matchSimilarKeywords",
            /// Unique keywords that guarantee the search answer is triggered.
            reserved_keywords/set_reserved_keywords: str_coll() => "reservedKeywords",
        }
    }
}

graph_complex_model! {
    /// A platform- or language-specific variation of an answer.
    pub struct AnswerVariant {
        tag: "#microsoft.graph.search.answerVariant",
        fields: {
            /// Answer variation description shown on search results page.
            description/set_description: str() => "description",
            /// Answer variation name displayed in search results.
            display_name/set_display_name: str() => "displayName",
            /// Answer variation language in ISO 639-1 format.
            language_tag/set_language_tag: str() => "languageTag",
            /// Answer variation platform.
            platform/set_platform: enum_(DevicePlatformType) => "platform",
            /// Answer variation URL link.
            web_url/set_web_url: str() => "webUrl",
        }
    }
}

graph_entity_model! {
    /// A question-and-answer result curated by a search administrator.
    pub struct Qna : SearchAnswer {
        tag: "#microsoft.graph.search.qna",
        fields: {
            /// Timestamp of when the QnA stops appearing as a search result.
            availability_end_date_time/set_availability_end_date_time: datetime() => "availabilityEndDateTime",
            /// Timestamp of when the QnA starts to appear as a search result.
            availability_start_date_time/set_availability_start_date_time: datetime() => "availabilityStartDateTime",
            /// The list of security groups eligible to view this QnA.
            group_ids/set_group_ids: str_coll() => "groupIds",
            /// True if a user or Microsoft suggested this QnA to the admin.
            is_suggested/set_is_suggested: bool() => "isSuggested",
            /// Keywords that trigger this QnA to appear in search results.
            keywords/set_keywords: obj(AnswerKeyword) => "keywords",
            /// A list of geographically specific language names in which this QnA can be viewed.
            language_tags/set_language_tags: str_coll() => "languageTags",
            /// List of devices and operating systems able to view this QnA.
            platforms/set_platforms: enum_coll(DevicePlatformType) => "platforms",
            /// State of the QnA.
            state/set_state: enum_(AnswerState) => "state",
            /// Variations of a QnA for different countries or devices.
            targeted_variations/set_targeted_variations: coll(AnswerVariant) => "targetedVariations",
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

    fn sample_qna() -> serde_json::Value {
        json!({
            "id": "733b26d5-af76-4eea-ac69-1a0ce8716897",
            "displayName": "Global Country Holiday",
            "description": "The dates that Contoso offices will be closed to observe holidays.",
            "webUrl": "http://www.contoso.com/",
            "state": "published",
            "isSuggested": false,
            "keywords": {
                "keywords": ["holidays", "paid days off"],
                "reservedKeywords": ["holiday schedule"],
                "matchSimilarKeywords": true,
            },
            "platforms": ["ios", "windows10AndLater"],
            "targetedVariations": [{
                "languageTag": "es-es",
                "platform": "android",
                "displayName": "Vacaciones",
            }],
        })
    }

    #[test]
    fn test_parse_qna() {
        let qna: Qna = from_value(&sample_qna()).unwrap();
        assert_eq!(qna.id(), Some("733b26d5-af76-4eea-ac69-1a0ce8716897"));
        assert_eq!(qna.base().display_name(), Some("Global Country Holiday"));
        assert_eq!(qna.state(), Some(AnswerState::Published));
        assert_eq!(qna.is_suggested(), Some(false));
        assert_eq!(
            qna.platforms(),
            Some(&[DevicePlatformType::Ios, DevicePlatformType::Windows10AndLater][..])
        );

        let keywords = qna.keywords().unwrap();
        assert_eq!(keywords.match_similar_keywords(), Some(true));
        assert_eq!(
            keywords.keywords(),
            Some(&["holidays".to_owned(), "paid days off".to_owned()][..])
        );
    }

    #[test]
    fn test_variant_platform() {
        let qna: Qna = from_value(&sample_qna()).unwrap();
        let variants = qna.targeted_variations().unwrap();
        assert_eq!(variants[0].language_tag(), Some("es-es"));
        assert_eq!(variants[0].platform(), Some(DevicePlatformType::Android));
    }

    #[test]
    fn test_round_trip_keeps_enum_wire_names() {
        let qna: Qna = from_value(&sample_qna()).unwrap();
        let rendered = to_value(&qna);
        assert_eq!(rendered.get("state"), Some(&json!("published")));
        assert_eq!(
            rendered.get("platforms"),
            Some(&json!(["ios", "windows10AndLater"]))
        );
        assert_eq!(
            rendered.pointer("/targetedVariations/0/platform"),
            Some(&json!("android"))
        );
    }
}
