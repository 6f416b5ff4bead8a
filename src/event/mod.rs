#![doc = r#"
Events that can appear in a track chunk

# Hierarchy
```text
              |-------------|
              | Track Event |
              |-------------|
               /           \
|---------------------|   |------------|
| Channel Voice Event |   | Meta Event |
|---------------------|   |------------|
```

Both kinds own their delta time and serialize themselves to wire form;
a [`Track`](crate::Track) concatenates them in insertion order.
"#]

mod channel;
pub use channel::*;

mod meta;
pub use meta::*;

use crate::EventError;
use alloc::vec::Vec;

#[doc = r#"
Either kind of event a track can hold.
"#]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackEvent {
    /// A channel voice event
    ChannelVoice(ChannelVoiceEvent),
    /// A meta event
    Meta(MetaEvent),
}

impl From<ChannelVoiceEvent> for TrackEvent {
    fn from(value: ChannelVoiceEvent) -> Self {
        Self::ChannelVoice(value)
    }
}

impl From<MetaEvent> for TrackEvent {
    fn from(value: MetaEvent) -> Self {
        Self::Meta(value)
    }
}

impl TrackEvent {
    /// Serialize to wire form. Pure; the event is not consumed.
    ///
    /// # Errors
    /// if a meta event has no kind set.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EventError> {
        let mut out = Vec::new();
        self.write_into(&mut out)?;
        Ok(out)
    }

    pub(crate) fn write_into(&self, out: &mut Vec<u8>) -> Result<(), EventError> {
        match self {
            Self::ChannelVoice(event) => {
                event.write_into(out);
                Ok(())
            }
            Self::Meta(event) => event.write_into(out),
        }
    }
}
