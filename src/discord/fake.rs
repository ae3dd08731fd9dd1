//! In-memory Discord collaborators for tests.

use serenity::async_trait;
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    sync::Mutex,
};

use crate::{
    discord::{Messenger, RoleManager},
    error::{messenger::MessengerError, AppError},
    model::leaderboard::LeaderboardView,
};

/// Messenger keeping posted messages in a map keyed by message ID.
pub struct FakeMessenger {
    messages: Mutex<BTreeMap<u64, LeaderboardView>>,
    next_id: Mutex<u64>,
    sends: Mutex<u32>,
    edits: Mutex<u32>,
    fail_edits: Mutex<bool>,
    fail_sends: Mutex<bool>,
}

impl FakeMessenger {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(BTreeMap::new()),
            next_id: Mutex::new(1000),
            sends: Mutex::new(0),
            edits: Mutex::new(0),
            fail_edits: Mutex::new(false),
            fail_sends: Mutex::new(false),
        }
    }

    /// Simulates a message that exists on Discord before the test starts.
    pub fn with_message(self, message_id: u64, view: LeaderboardView) -> Self {
        self.messages.lock().unwrap().insert(message_id, view);
        self
    }

    /// Simulates a moderator deleting the message by hand.
    pub fn delete(&self, message_id: u64) {
        self.messages.lock().unwrap().remove(&message_id);
    }

    /// Makes every edit fail with an error other than "not found".
    pub fn fail_edits(&self) {
        *self.fail_edits.lock().unwrap() = true;
    }

    pub fn fail_sends(&self) {
        *self.fail_sends.lock().unwrap() = true;
    }

    pub fn message_ids(&self) -> Vec<u64> {
        self.messages.lock().unwrap().keys().copied().collect()
    }

    pub fn message(&self, message_id: u64) -> Option<LeaderboardView> {
        self.messages.lock().unwrap().get(&message_id).cloned()
    }

    pub fn sends(&self) -> u32 {
        *self.sends.lock().unwrap()
    }

    pub fn edits(&self) -> u32 {
        *self.edits.lock().unwrap()
    }
}

#[async_trait]
impl Messenger for FakeMessenger {
    async fn send(&self, view: &LeaderboardView) -> Result<u64, MessengerError> {
        *self.sends.lock().unwrap() += 1;
        if *self.fail_sends.lock().unwrap() {
            return Err(MessengerError::Discord(Box::new(serenity::Error::Other(
                "webhook unavailable",
            ))));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = *next_id;
        self.messages.lock().unwrap().insert(id, view.clone());
        Ok(id)
    }

    async fn edit(&self, message_id: u64, view: &LeaderboardView) -> Result<(), MessengerError> {
        *self.edits.lock().unwrap() += 1;
        if *self.fail_edits.lock().unwrap() {
            return Err(MessengerError::Discord(Box::new(serenity::Error::Other(
                "rate limited",
            ))));
        }

        match self.messages.lock().unwrap().get_mut(&message_id) {
            Some(existing) => {
                *existing = view.clone();
                Ok(())
            }
            None => Err(MessengerError::NotFound(message_id)),
        }
    }
}

/// A role call made against [`FakeRoleManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleCall {
    Add { user_id: u64, role_id: u64 },
    Remove { user_id: u64, role_id: u64 },
}

/// Guild with a fixed member list and per-member role sets.
#[derive(Default)]
pub struct FakeRoleManager {
    members: Mutex<HashMap<u64, HashSet<u64>>>,
    calls: Mutex<Vec<RoleCall>>,
    fail_adds: Mutex<bool>,
    fail_removals: Mutex<HashSet<u64>>,
    fail_lookups: Mutex<HashSet<u64>>,
}

impl FakeRoleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(self, user_id: u64, roles: &[u64]) -> Self {
        self.members
            .lock()
            .unwrap()
            .insert(user_id, roles.iter().copied().collect());
        self
    }

    pub fn fail_adds(&self) {
        *self.fail_adds.lock().unwrap() = true;
    }

    /// Makes every removal of `role_id` fail, as Discord does for roles above the bot.
    pub fn fail_removal_of(&self, role_id: u64) {
        self.fail_removals.lock().unwrap().insert(role_id);
    }

    /// Makes the member lookup for `user_id` fail with a Discord error.
    pub fn fail_lookup(&self, user_id: u64) {
        self.fail_lookups.lock().unwrap().insert(user_id);
    }

    pub fn roles(&self, user_id: u64) -> HashSet<u64> {
        self.members
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<RoleCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoleManager for FakeRoleManager {
    async fn member_exists(&self, user_id: u64) -> Result<bool, AppError> {
        if self.fail_lookups.lock().unwrap().contains(&user_id) {
            return Err(serenity::Error::Other("member lookup failed").into());
        }
        Ok(self.members.lock().unwrap().contains_key(&user_id))
    }

    async fn add_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.calls
            .lock()
            .unwrap()
            .push(RoleCall::Add { user_id, role_id });
        if *self.fail_adds.lock().unwrap() {
            return Err(serenity::Error::Other("missing permissions").into());
        }

        if let Some(roles) = self.members.lock().unwrap().get_mut(&user_id) {
            roles.insert(role_id);
        }
        Ok(())
    }

    async fn remove_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.calls
            .lock()
            .unwrap()
            .push(RoleCall::Remove { user_id, role_id });
        if self.fail_removals.lock().unwrap().contains(&role_id) {
            return Err(serenity::Error::Other("role above the bot").into());
        }

        if let Some(roles) = self.members.lock().unwrap().get_mut(&user_id) {
            roles.remove(&role_id);
        }
        Ok(())
    }
}
