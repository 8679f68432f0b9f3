//! XML feed parsing.
//!
//! The feed is a document whose `<item>` elements (at any depth) each
//! describe one gallery entry:
//!
//! ```xml
//! <portfolio>
//!   <item>
//!     <title>Harbour</title>
//!     <description>Morning light</description>
//!     <media>["https://cdn.example.com/harbour.jpg"]</media>
//!     <type>still</type>
//!     <aspect_ratio>4/5</aspect_ratio>
//!     <category>photography</category>
//!     <alt_category>design</alt_category>
//!   </item>
//! </portfolio>
//! ```
//!
//! Lookups behave like a DOM `getElementsByTagName` on each item: the first
//! matching descendant wins for single-valued fields, and every match is
//! collected for categories. Element text is the concatenation of all text
//! and CDATA below the element.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::FeedError;
use crate::models::{DEFAULT_ASPECT_RATIO, GalleryItem, MediaType};

// =============================================================================
// Fields
// =============================================================================

/// Item child elements the parser extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
    Media,
    Type,
    AspectRatio,
    Category,
    AltCategory,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"title" => Some(Self::Title),
            b"description" => Some(Self::Description),
            b"media" => Some(Self::Media),
            b"type" => Some(Self::Type),
            b"aspect_ratio" => Some(Self::AspectRatio),
            b"category" => Some(Self::Category),
            b"alt_category" => Some(Self::AltCategory),
            _ => None,
        }
    }
}

/// Raw text collected for one `<item>` before validation.
#[derive(Debug, Default)]
struct ItemDraft {
    title: Option<String>,
    description: Option<String>,
    media: Option<String>,
    media_type: Option<String>,
    aspect_ratio: Option<String>,
    categories: Vec<String>,
    alt_categories: Vec<String>,
}

impl ItemDraft {
    fn accept(&mut self, field: Field, text: &str) {
        let first = |slot: &mut Option<String>| {
            if slot.is_none() {
                *slot = Some(text.to_string());
            }
        };
        match field {
            Field::Title => first(&mut self.title),
            Field::Description => first(&mut self.description),
            Field::Media => first(&mut self.media),
            Field::Type => first(&mut self.media_type),
            Field::AspectRatio => first(&mut self.aspect_ratio),
            Field::Category => self.categories.push(text.to_string()),
            Field::AltCategory => self.alt_categories.push(text.to_string()),
        }
    }

    fn finish(self, index: usize) -> Result<GalleryItem, FeedError> {
        let missing = |element| FeedError::MissingElement {
            item: index,
            element,
        };

        let title = self.title.ok_or_else(|| missing("title"))?;
        let description = self.description.ok_or_else(|| missing("description"))?;
        let media_text = self.media.ok_or_else(|| missing("media"))?;
        let media_type = self.media_type.ok_or_else(|| missing("type"))?;

        let media: Vec<String> =
            serde_json::from_str(&media_text).map_err(|e| FeedError::MediaJson {
                item: index,
                message: e.to_string(),
            })?;

        Ok(GalleryItem {
            title,
            description,
            media,
            media_type: MediaType::from_feed(&media_type),
            aspect_ratio: self
                .aspect_ratio
                .unwrap_or_else(|| DEFAULT_ASPECT_RATIO.to_string()),
            categories: self.categories,
            alt_categories: self.alt_categories,
        })
    }
}

/// A field element whose text is being collected.
struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

// =============================================================================
// Parser
// =============================================================================

/// Parse a feed document into gallery items, in document order.
///
/// Any malformed item fails the whole feed.
pub fn parse_feed(xml: &str) -> Result<Vec<GalleryItem>, FeedError> {
    let mut reader = Reader::from_str(xml);

    // One draft per <item>, indexed by start-tag order.
    let mut drafts: Vec<ItemDraft> = Vec::new();
    // (draft index, depth) of items still open.
    let mut open_items: Vec<(usize, usize)> = Vec::new();
    let mut captures: Vec<Capture> = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;
    // A document has exactly one root; anything after it is malformed.
    let mut root_closed = false;

    let xml_error = |reader: &Reader<&[u8]>, message: String| FeedError::Xml {
        position: reader.buffer_position() as u64,
        message,
    };

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if depth == 0 && root_closed {
                    return Err(xml_error(
                        &reader,
                        "extra content after the root element".to_string(),
                    ));
                }
                depth += 1;
                saw_root = true;
                let name = e.local_name();
                if name.as_ref() == b"item" {
                    drafts.push(ItemDraft::default());
                    open_items.push((drafts.len() - 1, depth));
                } else if let Some(field) = Field::from_tag(name.as_ref())
                    && !open_items.is_empty()
                {
                    captures.push(Capture {
                        field,
                        depth,
                        text: String::new(),
                    });
                }
            }
            Ok(Event::Empty(e)) => {
                if depth == 0 {
                    if root_closed {
                        return Err(xml_error(
                            &reader,
                            "extra content after the root element".to_string(),
                        ));
                    }
                    root_closed = true;
                }
                saw_root = true;
                let name = e.local_name();
                if name.as_ref() == b"item" {
                    drafts.push(ItemDraft::default());
                } else if let Some(field) = Field::from_tag(name.as_ref()) {
                    for &(index, _) in &open_items {
                        drafts[index].accept(field, "");
                    }
                }
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| xml_error(&reader, err.to_string()))?;
                if depth == 0 {
                    if !text.trim().is_empty() {
                        return Err(xml_error(
                            &reader,
                            "text outside of the root element".to_string(),
                        ));
                    }
                    continue;
                }
                for capture in &mut captures {
                    capture.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e);
                for capture in &mut captures {
                    capture.text.push_str(&text);
                }
            }
            Ok(Event::End(_)) => {
                if captures.last().is_some_and(|c| c.depth == depth)
                    && let Some(capture) = captures.pop()
                {
                    for &(index, _) in &open_items {
                        drafts[index].accept(capture.field, &capture.text);
                    }
                }
                if open_items.last().is_some_and(|&(_, d)| d == depth) {
                    open_items.pop();
                }
                depth = depth.checked_sub(1).ok_or_else(|| {
                    xml_error(&reader, "closing tag without opening tag".to_string())
                })?;
                if depth == 0 {
                    root_closed = true;
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(xml_error(&reader, err.to_string())),
        }
    }

    if depth != 0 {
        return Err(xml_error(&reader, "unexpected end of document".to_string()));
    }
    if !saw_root {
        return Err(FeedError::NoRootElement);
    }

    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| draft.finish(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ITEM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<portfolio>
  <item>
    <title>Harbour</title>
    <description>Morning light</description>
    <media>["img1.jpg"]</media>
    <type>still</type>
    <category>photography</category>
  </item>
</portfolio>"#;

    fn item_xml(inner: &str) -> String {
        format!("<portfolio><item>{}</item></portfolio>", inner)
    }

    #[test]
    fn test_parse_single_item() {
        let items = parse_feed(ONE_ITEM).unwrap();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.title, "Harbour");
        assert_eq!(item.description, "Morning light");
        assert_eq!(item.media, vec!["img1.jpg"]);
        assert_eq!(item.media_type, MediaType::Still);
        assert_eq!(item.aspect_ratio, "16/9");
        assert_eq!(item.categories, vec!["photography"]);
        assert!(item.alt_categories.is_empty());
    }

    #[test]
    fn test_aspect_ratio_present() {
        let xml = item_xml(
            "<title>t</title><description>d</description><media>[]</media>\
             <type>motion</type><aspect_ratio>4/5</aspect_ratio>",
        );
        let items = parse_feed(&xml).unwrap();
        assert_eq!(items[0].aspect_ratio, "4/5");
    }

    #[test]
    fn test_type_is_trimmed() {
        let xml = item_xml(
            "<title>t</title><description>d</description><media>[\"a\"]</media>\
             <type>\n   still  \n</type>",
        );
        assert_eq!(parse_feed(&xml).unwrap()[0].media_type, MediaType::Still);
    }

    #[test]
    fn test_title_is_not_trimmed() {
        let xml = item_xml(
            "<title> spaced </title><description>d</description><media>[]</media>\
             <type>still</type>",
        );
        assert_eq!(parse_feed(&xml).unwrap()[0].title, " spaced ");
    }

    #[test]
    fn test_categories_in_document_order() {
        let xml = item_xml(
            "<category>motion</category><title>t</title><description>d</description>\
             <alt_category>design</alt_category><media>[]</media><type>motion</type>\
             <category>3D_art</category><alt_category>photography</alt_category>",
        );
        let item = &parse_feed(&xml).unwrap()[0];
        assert_eq!(item.categories, vec!["motion", "3D_art"]);
        assert_eq!(item.alt_categories, vec!["design", "photography"]);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let xml = item_xml(
            "<title>first</title><title>second</title><description>d</description>\
             <media>[]</media><type>still</type>",
        );
        assert_eq!(parse_feed(&xml).unwrap()[0].title, "first");
    }

    #[test]
    fn test_entities_and_cdata() {
        let xml = item_xml(
            "<title>Salt &amp; Pepper</title>\
             <description><![CDATA[<b>bold</b> claim]]></description>\
             <media><![CDATA[[\"a.jpg\", \"b\"]]]></media><type>still</type>",
        );
        let item = &parse_feed(&xml).unwrap()[0];
        assert_eq!(item.title, "Salt & Pepper");
        assert_eq!(item.description, "<b>bold</b> claim");
        assert_eq!(item.media, vec!["a.jpg", "b"]);
    }

    #[test]
    fn test_empty_category_element() {
        let xml = item_xml(
            "<title>t</title><description>d</description><media>[]</media>\
             <type>still</type><category/>",
        );
        assert_eq!(parse_feed(&xml).unwrap()[0].categories, vec![""]);
    }

    #[test]
    fn test_items_at_any_depth() {
        let xml = r#"<root><section><item><title>a</title><description/>
            <media>[]</media><type>still</type></item></section>
            <item><title>b</title><description/><media>[]</media><type>motion</type></item></root>"#;
        let items = parse_feed(xml).unwrap();
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
        assert_eq!(items[0].description, "");
    }

    #[test]
    fn test_no_items() {
        assert!(parse_feed("<portfolio/>").unwrap().is_empty());
        assert!(parse_feed("<portfolio></portfolio>").unwrap().is_empty());
    }

    #[test]
    fn test_missing_required_element() {
        let xml = item_xml("<title>t</title><media>[]</media><type>still</type>");
        assert_eq!(
            parse_feed(&xml),
            Err(FeedError::MissingElement {
                item: 0,
                element: "description"
            })
        );
    }

    #[test]
    fn test_one_bad_item_fails_feed() {
        let xml = r#"<p><item><title>ok</title><description/><media>[]</media><type>still</type></item>
            <item><title>bad</title><description/><type>still</type></item></p>"#;
        assert_eq!(
            parse_feed(xml),
            Err(FeedError::MissingElement {
                item: 1,
                element: "media"
            })
        );
    }

    #[test]
    fn test_invalid_media_json() {
        let xml = item_xml(
            "<title>t</title><description>d</description><media>img1.jpg</media>\
             <type>still</type>",
        );
        assert!(matches!(
            parse_feed(&xml),
            Err(FeedError::MediaJson { item: 0, .. })
        ));

        // Numbers are not media strings.
        let xml = item_xml(
            "<title>t</title><description>d</description><media>[1, 2]</media>\
             <type>still</type>",
        );
        assert!(matches!(
            parse_feed(&xml),
            Err(FeedError::MediaJson { item: 0, .. })
        ));
    }

    #[test]
    fn test_non_xml_body() {
        assert_eq!(parse_feed(""), Err(FeedError::NoRootElement));
        assert!(matches!(
            parse_feed("Service Unavailable"),
            Err(FeedError::Xml { .. })
        ));
        assert!(matches!(
            parse_feed(r#"{"items": []}"#),
            Err(FeedError::Xml { .. })
        ));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(
            parse_feed("<portfolio><item></portfolio>"),
            Err(FeedError::Xml { .. })
        ));
        assert!(matches!(
            parse_feed("<portfolio><item>"),
            Err(FeedError::Xml { .. })
        ));
    }

    #[test]
    fn test_multiple_roots_rejected() {
        let entry =
            "<item><title>t</title><description/><media>[]</media><type>still</type></item>";
        assert!(matches!(
            parse_feed(&format!("{entry}{entry}")),
            Err(FeedError::Xml { .. })
        ));
        assert!(matches!(
            parse_feed("<portfolio/><portfolio/>"),
            Err(FeedError::Xml { .. })
        ));
        assert!(matches!(
            parse_feed(&format!("<portfolio></portfolio>\n{entry}")),
            Err(FeedError::Xml { .. })
        ));
        // Trailing whitespace after the root is fine.
        assert!(parse_feed("<portfolio></portfolio>\n  ").unwrap().is_empty());
    }

    #[test]
    fn test_empty_aspect_ratio_not_defaulted() {
        let xml = item_xml(
            "<title>t</title><description>d</description><media>[]</media>\
             <type>still</type><aspect_ratio/>",
        );
        assert_eq!(parse_feed(&xml).unwrap()[0].aspect_ratio, "");

        let xml = item_xml(
            "<title>t</title><description>d</description><media>[]</media>\
             <type>still</type><aspect_ratio></aspect_ratio>",
        );
        assert_eq!(parse_feed(&xml).unwrap()[0].aspect_ratio, "");
    }

    #[test]
    fn test_input_is_untouched() {
        let source = ONE_ITEM.to_string();
        let _ = parse_feed(&source);
        assert_eq!(source, ONE_ITEM);
    }
}
