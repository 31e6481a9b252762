use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use edsim_core::{FieldKey, Hospital, SubmissionSnapshot};
use edsim_metrics::{FormState, ValidationReport};
use edsim_render::FormScreen;
use tokio::task::AbortHandle;

use crate::navigation::NavRequest;

/// How long the "submitted successfully" banner stays up.
pub const BANNER_DURATION: Duration = Duration::from_secs(3);

/// Transient success indicator that hides itself after a delay.
///
/// The hide timer is a tokio task owned by the banner. Showing again
/// restarts it; dropping the banner aborts it.
#[derive(Debug, Default)]
pub struct SuccessBanner {
    visible: Arc<AtomicBool>,
    timer: Option<AbortHandle>,
}

impl SuccessBanner {
    /// Must be called from within a tokio runtime.
    pub fn show(&mut self, duration: Duration) {
        self.cancel_timer();
        self.visible.store(true, Ordering::Release);

        let visible = Arc::clone(&self.visible);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            visible.store(false, Ordering::Release);
            tracing::debug!("success banner expired");
        });
        self.timer = Some(handle.abort_handle());
    }

    pub fn dismiss(&mut self) {
        self.cancel_timer();
        self.visible.store(false, Ordering::Release);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Acquire)
    }

    /// A read-only view of the visibility flag that outlives the banner.
    pub fn watch(&self) -> BannerWatch {
        BannerWatch(Arc::clone(&self.visible))
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for SuccessBanner {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[derive(Debug, Clone)]
pub struct BannerWatch(Arc<AtomicBool>);

impl BannerWatch {
    pub fn is_visible(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// The data entry form for one selected hospital.
///
/// Lives exactly as long as the form screen is showing. Navigation is only
/// requested through the returned [`NavRequest`]s.
#[derive(Debug)]
pub struct FormSession {
    hospital: &'static Hospital,
    form: FormState,
    banner: SuccessBanner,
}

impl FormSession {
    pub fn new(hospital: &'static Hospital) -> Self {
        Self {
            hospital,
            form: FormState::new(hospital.name),
            banner: SuccessBanner::default(),
        }
    }

    pub fn hospital(&self) -> &'static Hospital {
        self.hospital
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn banner(&self) -> &SuccessBanner {
        &self.banner
    }

    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.form.set_field(key, value);
    }

    /// Validate and, on success, freeze a snapshot and raise the banner.
    pub fn submit(&mut self) -> Result<&SubmissionSnapshot, &ValidationReport> {
        if self.form.submit().is_ok() {
            self.banner.show(BANNER_DURATION);
        }
        match self.form.snapshot() {
            Some(snapshot) if self.form.report().is_empty() => Ok(snapshot),
            _ => Err(self.form.report()),
        }
    }

    pub fn new_entry(&mut self) {
        self.form.new_entry();
    }

    pub fn back(&self) -> NavRequest {
        NavRequest::Back
    }

    pub fn reset(&self) -> NavRequest {
        NavRequest::Reset
    }

    pub fn screen(&self) -> FormScreen<'_> {
        FormScreen {
            hospital: self.hospital,
            values: self.form.values(),
            report: self.form.report(),
            snapshot: self.form.snapshot(),
            banner: self.banner.is_visible(),
        }
    }
}
