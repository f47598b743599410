//! Per-episode rows and the tabulation that produces them.

use sn_sim::IndividualRecord;

/// Column order of every episode table.  A sweep column, when present, is
/// appended after these.
pub const EPISODE_COLUMNS: [&str; 11] = [
    "network_id",
    "family_nodes",
    "friend_nodes",
    "family_active_nodes",
    "friend_active_nodes",
    "family_support",
    "friend_support",
    "initial_mfq",
    "mfq_with_network",
    "mfq_without_network",
    "episode_number",
];

/// One individual at one episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeRow {
    pub network_id:          u64,
    pub family_nodes:        u32,
    pub friend_nodes:        u32,
    pub family_active_nodes: u32,
    pub friend_active_nodes: u32,
    pub family_support:      u32,
    pub friend_support:      u32,
    pub initial_mfq:         i32,
    pub mfq_with_network:    i32,
    pub mfq_without_network: i32,
    pub episode_number:      u32,
    /// Value of the swept parameter, if the run belongs to a sweep.
    pub sweep_value:         Option<f64>,
}

/// Expand one record into `num_episodes + 1` rows, episode 0 first.
pub fn tabulate(record: &IndividualRecord, sweep_value: Option<f64>) -> Vec<EpisodeRow> {
    let net = &record.network;
    let mfq = &record.mfq;
    mfq.mfq_with_network
        .iter()
        .zip(&mfq.mfq_without_network)
        .enumerate()
        .map(|(episode, (&with, &without))| EpisodeRow {
            network_id:          net.network_id.0,
            family_nodes:        net.family_nodes,
            friend_nodes:        net.friend_nodes,
            family_active_nodes: net.family_active_nodes,
            friend_active_nodes: net.friend_active_nodes,
            family_support:      net.family_support,
            friend_support:      net.friend_support,
            initial_mfq:         mfq.initial_mfq,
            mfq_with_network:    with,
            mfq_without_network: without,
            episode_number:      episode as u32,
            sweep_value,
        })
        .collect()
}

/// Tabulate a whole run, individuals in the order given.
pub fn tabulate_all(records: &[IndividualRecord], sweep_value: Option<f64>) -> Vec<EpisodeRow> {
    records.iter().flat_map(|r| tabulate(r, sweep_value)).collect()
}
