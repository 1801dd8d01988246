use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, StorefrontError};

use super::models::TeamMember;

pub const DEFAULT_RANDOM_COUNT: usize = 2;

pub struct TeamQuery<'a> {
    members: &'a [TeamMember],
}

impl<'a> TeamQuery<'a> {
    pub fn new(members: &'a [TeamMember]) -> Self {
        Self { members }
    }

    pub fn all(&self) -> &'a [TeamMember] {
        self.members
    }

    pub fn by_id(&self, member_id: &str) -> Result<&'a TeamMember> {
        self.members
            .iter()
            .find(|m| m.id == member_id)
            .ok_or_else(|| StorefrontError::NotFound(format!("team member with ID {member_id}")))
    }

    /// Up to `count` distinct members, picked at random.
    pub fn random(&self, count: usize) -> Vec<&'a TeamMember> {
        self.random_with(&mut rand::thread_rng(), count)
    }

    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<&'a TeamMember> {
        self.members.choose_multiple(rng, count).collect()
    }

    pub fn featured(&self) -> Option<&'a TeamMember> {
        self.members.first()
    }
}
