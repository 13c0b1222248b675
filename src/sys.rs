use web_time::{SystemTime, UNIX_EPOCH};

use crate::fields::Today;
use crate::utils;
use crate::{PickerError, PickerResult};

impl Today {
    /// Reads the current civil date from the system clock (UTC).
    ///
    /// This implementation is backed by [`web_time::SystemTime`], so it
    /// also works on `wasm32-unknown-unknown` targets.
    pub fn system() -> PickerResult<Self> {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| PickerError::general("Error fetching system time"))?;
        let epoch_days = (duration.as_secs() / 86_400) as i64;
        let (year, month, day) = utils::civil_from_epoch_days(epoch_days);
        Ok(Self::new(year, month, day))
    }
}
