//! Network URL constants for the TikTok data APIs.

/// Default REST API base URL for the InfluencerHunters ("IH") server.
pub const DEFAULT_IH_API_URL: &str = "https://www.influencerhunters.com/apis";

/// Default REST API base URL for the EnsembleData ("ED") server.
pub const DEFAULT_ED_API_URL: &str = "https://ensembledata.com/apis";
