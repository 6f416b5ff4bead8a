#[doc = r#"
The format word of the header chunk.

Format 2 (sequentially independent tracks) is never produced; a file is
format 0 for at most one track and format 1 otherwise.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatType {
    /// Format 0, a single multi-channel track
    SingleMultiChannel,
    /// Format 1, simultaneous tracks
    Simultaneous,
}

impl FormatType {
    /// The format a file with `count` tracks is written as.
    pub const fn for_track_count(count: usize) -> Self {
        if count <= 1 {
            Self::SingleMultiChannel
        } else {
            Self::Simultaneous
        }
    }

    /// The two big-endian bytes of the header field.
    pub const fn to_bytes(self) -> [u8; 2] {
        match self {
            Self::SingleMultiChannel => [0, 0],
            Self::Simultaneous => [0, 1],
        }
    }
}

#[test]
fn format_selection() {
    use pretty_assertions::assert_eq;
    assert_eq!(FormatType::for_track_count(0), FormatType::SingleMultiChannel);
    assert_eq!(FormatType::for_track_count(1), FormatType::SingleMultiChannel);
    assert_eq!(FormatType::for_track_count(2), FormatType::Simultaneous);
    assert_eq!(FormatType::for_track_count(16), FormatType::Simultaneous);
}
