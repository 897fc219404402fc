//! Top-level event table and the sum types only events use.

use std::sync::OnceLock;

use projector_protocol::{
    CaretInfoChange, CaretInfoChanged, Carets, Clipboard, DrawCommands, Event, ImageDataReply,
    MarkdownEvent, PingReply, Target, WindowColors, WindowSetChanged,
};

use crate::access::{field, optional_field, record_field, record_list};
use crate::decode::data::{caret_info, image_data, image_ids, int_size, point, rectangle, window_data};
use crate::decode::window_event::window_events;
use crate::error::DecodeError;
use crate::table::TagTable;
use crate::wire::WireMap;

pub(crate) fn events() -> &'static TagTable<Event> {
    static TABLE: OnceLock<TagTable<Event>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TagTable::new(
            "Event",
            &[
                ("a", |c| {
                    Ok(Event::ImageDataReply(ImageDataReply {
                        image_id: image_ids().field(c, "a")?,
                        image_data: image_data().field(c, "b")?,
                    }))
                }),
                ("b", |c| {
                    Ok(Event::PingReply(PingReply {
                        client_time_stamp: field(c, "a")?,
                        server_read_event_time_stamp: field(c, "b")?,
                    }))
                }),
                ("c", |c| {
                    Ok(Event::Clipboard(Clipboard {
                        string_content: field(c, "a")?,
                    }))
                }),
                ("d", |c| {
                    Ok(Event::WindowSetChanged(WindowSetChanged {
                        window_data_list: record_list(c, "a", true, window_data)?,
                    }))
                }),
                ("e", |c| {
                    Ok(Event::DrawCommands(DrawCommands {
                        target: targets().field(c, "a")?,
                        draw_events: window_events().list_field(c, "b", true)?,
                    }))
                }),
                ("f", |c| {
                    Ok(Event::CaretInfoChanged(CaretInfoChanged {
                        data: caret_changes().field(c, "a")?,
                    }))
                }),
                ("g", |c| {
                    markdown(MarkdownEvent::Show {
                        panel_id: field(c, "a")?,
                        show: field(c, "b")?,
                    })
                }),
                ("h", |c| {
                    markdown(MarkdownEvent::Resize {
                        panel_id: field(c, "a")?,
                        size: record_field(c, "b", int_size)?,
                    })
                }),
                ("i", |c| {
                    markdown(MarkdownEvent::Move {
                        panel_id: field(c, "a")?,
                        point: record_field(c, "b", point)?,
                    })
                }),
                ("j", |c| {
                    markdown(MarkdownEvent::Dispose {
                        panel_id: field(c, "a")?,
                    })
                }),
                ("k", |c| {
                    markdown(MarkdownEvent::PlaceToWindow {
                        panel_id: field(c, "a")?,
                        window_id: field(c, "b")?,
                    })
                }),
                ("l", |c| {
                    markdown(MarkdownEvent::SetHtml {
                        panel_id: field(c, "a")?,
                        html: field(c, "b")?,
                    })
                }),
                ("m", |c| {
                    markdown(MarkdownEvent::SetCss {
                        panel_id: field(c, "a")?,
                        css: field(c, "b")?,
                    })
                }),
                ("n", |c| {
                    markdown(MarkdownEvent::Scroll {
                        panel_id: field(c, "a")?,
                        scroll_offset: field(c, "b")?,
                    })
                }),
                ("o", |c| {
                    markdown(MarkdownEvent::BrowseUri {
                        link: field(c, "a")?,
                    })
                }),
                // Colour map decoding is not implemented; always empty.
                ("p", |_| Ok(Event::WindowColors(WindowColors::default()))),
            ],
        )
    })
}

fn markdown(event: MarkdownEvent) -> Result<Event, DecodeError> {
    Ok(Event::Markdown(event))
}

fn targets() -> &'static TagTable<Target> {
    static TABLE: OnceLock<TagTable<Target>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TagTable::new(
            "Target",
            &[
                ("a", |c| {
                    Ok(Target::Onscreen {
                        window_id: field(c, "a")?,
                    })
                }),
                ("b", |c| {
                    Ok(Target::Offscreen {
                        p_volatile_image_id: field(c, "a")?,
                        width: field(c, "b")?,
                        height: field(c, "c")?,
                    })
                }),
            ],
        )
    })
}

fn caret_changes() -> &'static TagTable<CaretInfoChange> {
    static TABLE: OnceLock<TagTable<CaretInfoChange>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TagTable::new(
            "CaretInfoChange",
            &[("a", |_| Ok(CaretInfoChange::NoCarets)), ("b", carets)],
        )
    })
}

fn carets(c: &WireMap) -> Result<CaretInfoChange, DecodeError> {
    Ok(CaretInfoChange::Carets(Carets {
        caret_info_list: record_list(c, "a", true, caret_info)?,
        font_id: optional_field(c, "b")?,
        font_size: field(c, "c")?,
        nominal_line_height: field(c, "d")?,
        plain_space_width: field(c, "e")?,
        editor_window_id: field(c, "f")?,
        editor_metrics: record_field(c, "g", rectangle)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use projector_protocol::{CaretInfo, CommonIntSize, ImageData, ImageId, Point};
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<Event, DecodeError> {
        events().decode(&value)
    }

    #[test]
    fn test_table_covers_a_to_p() {
        let tags = events().tags();
        assert_eq!(tags.len(), 16);
        assert_eq!(tags.first(), Some(&"a"));
        assert_eq!(tags.last(), Some(&"p"));
    }

    #[test]
    fn test_image_data_reply() {
        let event = decode(json!(["a", {
            "a": ["a", {"a": 17, "b": 42}],
            "b": ["b", {}]
        }]))
        .unwrap();
        assert_eq!(
            event,
            Event::ImageDataReply(ImageDataReply {
                image_id: ImageId::BufferedImageId {
                    identity_hash: 17,
                    state_hash: 42
                },
                image_data: ImageData::Empty,
            })
        );
    }

    #[test]
    fn test_offscreen_target_rounds_long() {
        let event = decode(json!(["e", {"a": ["b", {"a": 4294967296.0, "b": 64, "c": 32}]}])).unwrap();
        match event {
            Event::DrawCommands(dc) => {
                assert_eq!(
                    dc.target,
                    Target::Offscreen {
                        p_volatile_image_id: 4_294_967_296,
                        width: 64,
                        height: 32
                    }
                );
                assert!(dc.draw_events.is_empty());
            }
            other => panic!("expected DrawCommands, got {:?}", other),
        }
    }

    #[test]
    fn test_draw_commands_requires_target() {
        let err = decode(json!(["e", {"b": []}])).unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { ref key, .. } if key == "a"));
    }

    #[test]
    fn test_no_carets() {
        let event = decode(json!(["f", {"a": ["a", {}]}])).unwrap();
        assert_eq!(
            event,
            Event::CaretInfoChanged(CaretInfoChanged {
                data: CaretInfoChange::NoCarets
            })
        );
    }

    #[test]
    fn test_carets() {
        let event = decode(json!(["f", {"a": ["b", {
            "a": [{"a": {"a": 12.0, "b": 30.0}}],
            "b": 2,
            "c": 13,
            "d": 17,
            "e": 7.5,
            "f": 1,
            "g": {"a": 0, "b": 0, "c": 640, "d": 480}
        }]}]))
        .unwrap();
        match event {
            Event::CaretInfoChanged(CaretInfoChanged {
                data: CaretInfoChange::Carets(c),
            }) => {
                assert_eq!(
                    c.caret_info_list,
                    vec![CaretInfo {
                        location_in_window: Point { x: 12.0, y: 30.0 }
                    }]
                );
                assert_eq!(c.font_id, Some(2));
                assert_eq!(c.font_size, 13);
                assert_eq!(c.nominal_line_height, 17);
                assert_eq!(c.plain_space_width, 7.5);
                assert_eq!(c.editor_window_id, 1);
                assert_eq!(c.editor_metrics.width, 640.0);
            }
            other => panic!("expected Carets, got {:?}", other),
        }
    }

    #[test]
    fn test_carets_defaults() {
        let event = decode(json!(["f", {"a": ["b", {
            "c": 13, "d": 17, "e": 7.5, "f": 1,
            "g": {"a": 0, "b": 0, "c": 1, "d": 1}
        }]}]))
        .unwrap();
        match event {
            Event::CaretInfoChanged(CaretInfoChanged {
                data: CaretInfoChange::Carets(c),
            }) => {
                assert!(c.caret_info_list.is_empty());
                assert_eq!(c.font_id, None);
            }
            other => panic!("expected Carets, got {:?}", other),
        }
    }

    #[test]
    fn test_markdown_events() {
        let cases = vec![
            (
                json!(["g", {"a": 1, "b": true}]),
                MarkdownEvent::Show {
                    panel_id: 1,
                    show: true,
                },
            ),
            (
                json!(["h", {"a": 1, "b": {"a": 300, "b": 200}}]),
                MarkdownEvent::Resize {
                    panel_id: 1,
                    size: CommonIntSize {
                        width: 300,
                        height: 200,
                    },
                },
            ),
            (
                json!(["i", {"a": 1, "b": {"a": 5.0, "b": 6.0}}]),
                MarkdownEvent::Move {
                    panel_id: 1,
                    point: Point { x: 5.0, y: 6.0 },
                },
            ),
            (json!(["j", {"a": 1}]), MarkdownEvent::Dispose { panel_id: 1 }),
            (
                json!(["k", {"a": 1, "b": 9}]),
                MarkdownEvent::PlaceToWindow {
                    panel_id: 1,
                    window_id: 9,
                },
            ),
            (
                json!(["l", {"a": 1, "b": "<h1>x</h1>"}]),
                MarkdownEvent::SetHtml {
                    panel_id: 1,
                    html: "<h1>x</h1>".to_string(),
                },
            ),
            (
                json!(["m", {"a": 1, "b": "h1 {}"}]),
                MarkdownEvent::SetCss {
                    panel_id: 1,
                    css: "h1 {}".to_string(),
                },
            ),
            (
                json!(["n", {"a": 1, "b": 120}]),
                MarkdownEvent::Scroll {
                    panel_id: 1,
                    scroll_offset: 120,
                },
            ),
            (
                json!(["o", {"a": "https://example.com"}]),
                MarkdownEvent::BrowseUri {
                    link: "https://example.com".to_string(),
                },
            ),
        ];
        for (wire, expected) in cases {
            assert_eq!(decode(wire).unwrap(), Event::Markdown(expected));
        }
    }

    #[test]
    fn test_window_colors_ignores_content() {
        let event = decode(json!(["p", {"a": {"background": ["a", {"a": -1}]}}])).unwrap();
        assert_eq!(event, Event::WindowColors(WindowColors::default()));
    }

    #[test]
    fn test_event_content_must_be_map() {
        let err = decode(json!(["c", "hello"])).unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { ref key, .. } if key == "[1]"));
    }
}
