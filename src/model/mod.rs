//! The activity registry.
//!
//! Holds the full set of extracurricular activities in memory. The set of
//! activity names is fixed at startup; only the participant rosters change.

use std::{collections::BTreeMap, sync::Arc};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

/// A single extracurricular activity as it appears on the wire.
///
/// `max_participants` is informational, signup does not enforce it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// A cheap-to-clone handle to the shared activity registry.
#[derive(Clone, Debug)]
pub struct ModelManager {
    activities: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ModelManager {
    pub fn init() -> Self {
        info!("{:<12} - Seeding the activity registry", "init_model");

        Self {
            activities: Arc::new(RwLock::new(seed_activities())),
        }
    }

    /// A snapshot of every activity with its current roster.
    pub async fn activities(&self) -> BTreeMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Adds `email` to the roster of `activity_name`.
    ///
    /// The existence and membership checks happen under the same write lock
    /// as the append, so two concurrent signups cannot both pass the
    /// duplicate check.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(Error::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(Error::AlreadySignedUp);
        }
        activity.participants.push(email.to_owned());

        Ok(())
    }

    /// Removes `email` from the roster of `activity_name`.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(Error::ActivityNotFound)?;

        let pos = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(Error::NotSignedUp)?;
        activity.participants.remove(pos);

        Ok(())
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_owned(),
        schedule: schedule.to_owned(),
        max_participants,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

/// The fixed activity set the school offers, with the initial rosters.
fn seed_activities() -> BTreeMap<String, Activity> {
    BTreeMap::from([
        (
            "Chess Club".to_owned(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_owned(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_owned(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ])
}

// ###################################
// ->   ERROR
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("activity not found")]
    ActivityNotFound,
    #[error("student already signed up for this activity")]
    AlreadySignedUp,
    #[error("student not signed up for this activity")]
    NotSignedUp,
}
