//! Video model definition and related functionality.

use serde::{Deserialize, Serialize};

use crate::{duration::VideoDuration, error::Result};

/// A video as delivered by a playlist source, before its duration is parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct VideoInput {
    /// Video title
    pub title: String,

    /// Runtime as `HH:MM:SS`, `MM:SS` or bare seconds
    pub duration: String,

    /// Link identifying the video within its playlist
    pub link: String,

    /// Thumbnail URL
    #[serde(default)]
    pub thumbnail: String,
}

/// A single schedulable video within a study schedule.
///
/// Every field except `completed` is fixed at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    /// Video title
    pub title: String,

    /// Runtime of the video
    pub duration: VideoDuration,

    /// Stable identity used to match the same video across regenerations
    pub link: String,

    /// Thumbnail URL
    #[serde(default)]
    pub thumbnail: String,

    /// Whether the learner has watched this video
    #[serde(default)]
    pub completed: bool,
}

impl Video {
    /// Builds a video from source input, parsing its duration.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::MalformedDuration` when the duration text has
    /// an unsupported shape.
    pub fn from_input(input: &VideoInput, completed: bool) -> Result<Self> {
        Ok(Self {
            title: input.title.clone(),
            duration: input.duration.parse()?,
            link: input.link.clone(),
            thumbnail: input.thumbnail.clone(),
            completed,
        })
    }

    /// Runtime in whole seconds.
    pub fn seconds(&self) -> u64 {
        self.duration.as_secs()
    }
}

impl From<&Video> for VideoInput {
    fn from(video: &Video) -> Self {
        Self {
            title: video.title.clone(),
            duration: video.duration.to_string(),
            link: video.link.clone(),
            thumbnail: video.thumbnail.clone(),
        }
    }
}
