//! Plain record types produced by the two network stages.

use serde::{Deserialize, Serialize};
use sn_core::NetworkId;

/// Output of Stage A: contact counts and how many of them are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialNetwork {
    pub family_nodes:        u32,
    pub friend_nodes:        u32,
    pub family_active_nodes: u32,
    pub friend_active_nodes: u32,
}

impl SocialNetwork {
    #[inline]
    pub fn total_active(&self) -> u64 {
        u64::from(self.family_active_nodes) + u64::from(self.friend_active_nodes)
    }
}

/// Output of Stage B: active contacts that count towards support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportCounts {
    pub family: u32,
    pub friend: u32,
}

/// One individual's complete network record.
///
/// Built once by [`generate_network`][crate::generate_network] and never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStructure {
    pub network_id:          NetworkId,
    pub family_nodes:        u32,
    pub friend_nodes:        u32,
    pub family_active_nodes: u32,
    pub friend_active_nodes: u32,
    /// Supporters after capping; `family_support + friend_support <= max_nodes`.
    pub family_support:      u32,
    pub friend_support:      u32,
}

impl NetworkStructure {
    pub(crate) fn assemble(id: NetworkId, social: SocialNetwork, support: SupportCounts) -> Self {
        Self {
            network_id:          id,
            family_nodes:        social.family_nodes,
            friend_nodes:        social.friend_nodes,
            family_active_nodes: social.family_active_nodes,
            friend_active_nodes: social.friend_active_nodes,
            family_support:      support.family,
            friend_support:      support.friend,
        }
    }

    #[inline]
    pub fn total_support(&self) -> u32 {
        self.family_support + self.friend_support
    }

    /// The support counts the trajectory stage consumes.
    #[inline]
    pub fn support(&self) -> SupportCounts {
        SupportCounts { family: self.family_support, friend: self.friend_support }
    }
}
