use serde::Deserialize;

/// Response body of the speech-recognition endpoint.
///
/// Every level is defaulted: the provider legitimately omits parts of the
/// nesting when no speech was detected, and the client maps any missing
/// level to an empty transcript instead of failing.
#[derive(Debug, Default, Deserialize)]
pub struct ListenResponse {
    #[serde(default)]
    pub results: Results,
}

#[derive(Debug, Default, Deserialize)]
pub struct Results {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl ListenResponse {
    /// First channel's first alternative, or the empty string when any
    /// level of the nesting is absent.
    pub fn into_transcript(self) -> String {
        self.results
            .channels
            .into_iter()
            .next()
            .and_then(|channel| channel.alternatives.into_iter().next())
            .map(|alternative| alternative.transcript)
            .unwrap_or_default()
    }
}
