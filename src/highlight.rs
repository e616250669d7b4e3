//! Highlight ("expose") rendering.
//!
//! Renders an address with marker characters spliced around a bit range, or
//! around an arbitrary set of nibble positions. Highlighted groups print
//! literally: they are excluded from zero-run compression even when their
//! value is zero, so every marked nibble stays addressable.

use crate::addr::Address;
use crate::render;

/// Marker characters drawn at the edges of a highlighted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerConfig {
    /// Drawn immediately before the first highlighted nibble.
    pub left: char,
    /// Drawn immediately after the last highlighted nibble.
    pub right: char,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            left: '<',
            right: '>',
        }
    }
}

/// Highlight state of a single group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupHighlight {
    /// The group is untouched by the highlight.
    Empty,
    /// A nibble sub-range `[start, stop]` local to the group, 0..=3.
    ///
    /// A continuation flag means the highlight extends past that edge of
    /// the group, so no marker is drawn there.
    Span {
        start: u32,
        stop: u32,
        cont_left: bool,
        cont_right: bool,
    },
}

impl GroupHighlight {
    fn is_empty(&self) -> bool {
        matches!(self, GroupHighlight::Empty)
    }
}

/// A single marker annotation for multi-marker rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Draw before the nibble rather than after it.
    pub before: bool,
    /// Absolute nibble position, 0..=31. Out-of-range markers are ignored.
    pub position: u8,
    /// The character to splice in.
    pub ch: char,
}

/// Compute per-group highlight states for the nibble range covering
/// `[bit_start, bit_end]`.
///
/// Bit indexes divide by 4 into nibble indexes; group `i` covers nibbles
/// `[4i, 4i+3]`. With identical left/right marker characters, a highlight
/// touching the very first or very last nibble of the address treats that
/// outer edge as continuing, suppressing the redundant marker.
fn group_spans(bit_start: u32, bit_end: u32, config: &MarkerConfig) -> [GroupHighlight; 8] {
    let nib_start = bit_start / 4;
    let nib_stop = bit_end / 4;
    let mut spans = [GroupHighlight::Empty; 8];
    for (i, span) in spans.iter_mut().enumerate() {
        let first = i as u32 * 4;
        let last = first + 3;
        if nib_stop < first || nib_start > last {
            continue;
        }
        *span = GroupHighlight::Span {
            start: nib_start.max(first) - first,
            stop: nib_stop.min(last) - first,
            cont_left: nib_start < first,
            cont_right: last < nib_stop,
        };
    }
    if config.left == config.right {
        if let GroupHighlight::Span {
            start: 0,
            cont_left,
            ..
        } = &mut spans[0]
        {
            *cont_left = true;
        }
        if let GroupHighlight::Span {
            stop: 3,
            cont_right,
            ..
        } = &mut spans[7]
        {
            *cont_right = true;
        }
    }
    spans
}

/// Render one group with its highlight span spliced in.
///
/// The group is padded so every highlighted nibble position exists in the
/// text; markers are inserted highest offset first so the left insertion
/// cannot shift the right one.
fn render_group(value: u16, span: GroupHighlight, config: &MarkerConfig) -> String {
    let GroupHighlight::Span {
        start,
        stop,
        cont_left,
        cont_right,
    } = span
    else {
        return format!("{value:x}");
    };
    let width = (4 - start) as usize;
    let mut text = format!("{value:0width$x}");
    // offsets against the unmodified text, nibble n lives at len - 4 + n
    let left_pos = start as usize + text.len() - 4;
    let right_pos = stop as usize + text.len() - 4 + 1;
    if !cont_right {
        text.insert(right_pos, config.right);
    }
    if !cont_left {
        text.insert(left_pos, config.left);
    }
    text
}

/// Render the whole address with the bit range `[bit_start, bit_end]`
/// highlighted.
///
/// Bit 0 is the most-significant bit of the address. Zero-run compression
/// still applies, but only over groups the highlight does not touch.
///
/// # Example
///
/// ```
/// use v6calc::{Address, MarkerConfig};
///
/// let addr: Address = "0:a::".parse().unwrap();
/// let rendered = addr.expose_string(60, 63, &MarkerConfig::default());
/// assert_eq!(rendered, "0:a:0:<0>::");
/// ```
pub fn expose_string(addr: Address, bit_start: u32, bit_end: u32, config: &MarkerConfig) -> String {
    let spans = group_spans(bit_start, bit_end, config);
    let tokens: Vec<String> = addr
        .groups()
        .iter()
        .zip(&spans)
        .map(|(group, span)| render_group(group.value(), *span, config))
        .collect();
    render::compress(tokens, |i, token| token == "0" && spans[i].is_empty()).join(":")
}

/// Bucket markers by owning group, dropping out-of-range positions.
fn bucket_markers(markers: &[Marker]) -> [Vec<Marker>; 8] {
    let mut buckets: [Vec<Marker>; 8] = Default::default();
    for marker in markers {
        if usize::from(marker.position) < 32 {
            buckets[usize::from(marker.position) / 4].push(*marker);
        }
    }
    buckets
}

/// Render one group with a set of marker annotations spliced in.
fn render_group_multi(value: u16, group: usize, markers: &[Marker]) -> String {
    // local nibble offsets within this group
    let nibble = |m: &Marker| usize::from(m.position) - group * 4;
    let width = markers.iter().map(|m| 4 - nibble(m)).max().unwrap_or(0);
    let mut text = if width > 0 {
        format!("{value:0width$x}")
    } else {
        format!("{value:x}")
    };
    let mut inserts: Vec<(usize, usize, char)> = markers
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let mut offset = text.len() + nibble(m) - 4;
            if !m.before {
                offset += 1;
            }
            (offset, i, m.ch)
        })
        .collect();
    // highest offset first; equal offsets keep the callers' left-to-right order
    inserts.sort_by(|a, b| b.cmp(a));
    for (offset, _, ch) in inserts {
        text.insert(offset, ch);
    }
    text
}

/// Render the whole address with an arbitrary set of nibble markers.
///
/// Annotated groups are padded to reach their deepest referenced nibble and
/// excluded from zero-run compression, like highlighted groups in
/// [`expose_string`].
pub fn multi_expose_string(addr: Address, markers: &[Marker]) -> String {
    let buckets = bucket_markers(markers);
    let tokens: Vec<String> = addr
        .groups()
        .iter()
        .enumerate()
        .map(|(i, group)| {
            if buckets[i].is_empty() {
                group.to_string()
            } else {
                render_group_multi(group.value(), i, &buckets[i])
            }
        })
        .collect();
    render::compress(tokens, |i, token| token == "0" && buckets[i].is_empty()).join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Address {
        text.parse().unwrap()
    }

    fn expose(text: &str, start: u32, end: u32) -> String {
        expose_string(parse(text), start, end, &MarkerConfig::default())
    }

    #[test]
    fn test_span_within_one_group() {
        // bits 60..63 are the last nibble of group 3
        assert_eq!(expose("0:a::", 60, 63), "0:a:0:<0>::");
    }

    #[test]
    fn test_span_at_group_start() {
        // nibbles 0..2: group 0 hosts everything, group 1 untouched
        assert_eq!(expose("ffff:ffff::", 0, 8), "<fff>f:ffff::");
    }

    #[test]
    fn test_continuation_suppresses_interior_markers() {
        // nibbles 2..5 straddle groups 0 and 1; no markers at the shared edge
        assert_eq!(expose("1111:2222::", 8, 23), "11<11:22>22::");
    }

    #[test]
    fn test_highlighted_zero_group_not_compressed() {
        // group 3 is zero but highlighted, so only groups 4..7 compress
        let rendered = expose("0:a::", 60, 63);
        assert!(rendered.ends_with("<0>::"));
        assert_eq!(rendered.matches(':').count(), 5);
    }

    #[test]
    fn test_identical_markers_suppressed_at_address_edges() {
        let config = MarkerConfig {
            left: '|',
            right: '|',
        };
        // touches nibble 0: no left marker at the absolute start
        assert_eq!(
            expose_string(parse("ffff::"), 0, 4, &config),
            "ff|ff::"
        );
        // touches nibble 31: no right marker at the absolute end
        assert_eq!(
            expose_string(parse("::ffff"), 124, 127, &config),
            "::fff|f"
        );
    }

    #[test]
    fn test_multi_marker_single() {
        let markers = [Marker {
            before: true,
            position: 8,
            ch: '[',
        }];
        assert_eq!(
            multi_expose_string(parse("0:0:1234::"), &markers),
            "0:0:[1234::"
        );
    }

    #[test]
    fn test_multi_marker_two_in_one_group() {
        // both markers land at the same string offset of group 0; the
        // first-listed one must end up on the left
        let markers = [
            Marker {
                before: true,
                position: 2,
                ch: '_',
            },
            Marker {
                before: false,
                position: 1,
                ch: '^',
            },
        ];
        assert_eq!(multi_expose_string(parse("400::"), &markers), "4_^00::");
    }

    #[test]
    fn test_multi_marker_out_of_range_ignored() {
        let markers = [Marker {
            before: true,
            position: 32,
            ch: '!',
        }];
        assert_eq!(multi_expose_string(parse("a::1"), &markers), "a::1");
    }
}
