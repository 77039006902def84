//! Run/stop control for the animation loop.
//!
//! The loop re-arms itself with `requestAnimationFrame` after every frame. It
//! checks a shared flag before doing any work, so stopping is just flipping the
//! flag: the next scheduled callback sees [`LoopState::Stopped`], paints
//! nothing and does not schedule again. Listeners the loop depends on are
//! released at the moment of stopping, not on that last callback, since a
//! hidden tab may never deliver it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Lifecycle of the render loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	/// Frames are painted and re-armed.
	Running,
	/// The next frame callback returns without painting.
	Stopped,
}

/// Shared handle to a render loop's state. Cheap to clone, `Send + Sync`, so
/// it can live in cleanup callbacks.
#[derive(Clone, Debug)]
pub struct LoopHandle {
	running: Arc<AtomicBool>,
}

impl LoopHandle {
	/// A handle in the [`LoopState::Running`] state.
	pub fn start() -> Self {
		Self {
			running: Arc::new(AtomicBool::new(true)),
		}
	}

	/// Current lifecycle state.
	pub fn state(&self) -> LoopState {
		if self.running.load(Ordering::Acquire) {
			LoopState::Running
		} else {
			LoopState::Stopped
		}
	}

	/// Shorthand for `state() == LoopState::Running`.
	pub fn is_running(&self) -> bool {
		self.state() == LoopState::Running
	}

	/// Move to [`LoopState::Stopped`]. Idempotent; there is no way back.
	pub fn stop(&self) {
		self.running.store(false, Ordering::Release);
	}

	/// Stop, then hand whatever `slot` holds to `release`. The slot is left
	/// empty, so repeated calls release nothing further.
	pub fn stop_releasing<T>(&self, slot: &mut Option<T>, release: impl FnOnce(T)) {
		self.stop();
		if let Some(resource) = slot.take() {
			release(resource);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_running() {
		assert_eq!(LoopHandle::start().state(), LoopState::Running);
	}

	#[test]
	fn stop_is_seen_by_every_clone() {
		let handle = LoopHandle::start();
		let frame_side = handle.clone();
		handle.stop();
		assert!(!frame_side.is_running());
		handle.stop();
		assert_eq!(frame_side.state(), LoopState::Stopped);
	}

	#[test]
	fn stopping_releases_held_resource_once() {
		let handle = LoopHandle::start();
		let mut listener = Some("resize");
		let mut released = Vec::new();

		handle.stop_releasing(&mut listener, |l| released.push(l));
		assert!(!handle.is_running());
		assert_eq!(released, ["resize"]);
		assert!(listener.is_none());

		handle.stop_releasing(&mut listener, |l| released.push(l));
		assert_eq!(released.len(), 1);
	}

	#[test]
	fn stopping_with_nothing_held_still_stops() {
		let handle = LoopHandle::start();
		let mut nothing: Option<()> = None;
		handle.stop_releasing(&mut nothing, |_| panic!("nothing to release"));
		assert_eq!(handle.state(), LoopState::Stopped);
	}
}
