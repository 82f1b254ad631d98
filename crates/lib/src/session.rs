use serde::Serialize;

use crate::{api::ScanResult, recover::RecoveryStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    #[default]
    Idle,
    Loading,
    Done,
    Error,
}

impl From<RecoveryStep> for RecoveryStatus {
    fn from(step: RecoveryStep) -> Self {
        match step {
            RecoveryStep::Idle => Self::Idle,
            RecoveryStep::Requesting | RecoveryStep::Signing | RecoveryStep::Broadcasting => {
                Self::Loading
            }
            RecoveryStep::Done => Self::Done,
            RecoveryStep::Error => Self::Error,
        }
    }
}

/// Point-in-time view of the user session, rebuilt from the app state on demand
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Session {
    pub connected_address: Option<String>,
    pub scan_result: Option<ScanResult>,
    pub recovery_status: RecoveryStatus,
    pub transaction_id: Option<String>,
}
