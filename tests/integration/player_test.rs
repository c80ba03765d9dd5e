//! End-to-end player behaviour over the simulated media element

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use vidctl::fullscreen::{BackendError, FullscreenApi, FullscreenBackend};
use vidctl::player::{MediaElement, SCRUB_MAX};

use crate::helpers::{load, mp4_props, run_for, sim_player, sim_player_with_backends};

// ============================================================================
// Pointer and auto-hide
// ============================================================================

#[test]
fn pointer_enter_and_leave_update_state() {
    let (mut player, _clock) = sim_player(mp4_props(), 60.0);

    player.on_mouse_enter();
    assert!(player.state().mouse_over);
    player.on_mouse_leave();
    assert!(!player.state().mouse_over);
}

#[test]
fn controls_hide_500ms_after_pointer_leaves_while_playing() {
    let props = mp4_props().with_autohide_delay(Duration::from_millis(500));
    let (mut player, clock) = sim_player(props, 60.0);
    load(&mut player, &clock);
    player.play(None);

    player.on_mouse_enter();
    player.on_mouse_leave();
    run_for(&mut player, &clock, 450, 50);
    assert!(player.state().show_controls);

    run_for(&mut player, &clock, 50, 50);
    assert!(!player.state().show_controls);
    assert_eq!(player.view().root_classes(), "player player--controls-hidden");
}

#[test]
fn returning_pointer_reveals_controls() {
    let props = mp4_props().with_autohide_delay(Duration::from_millis(500));
    let (mut player, clock) = sim_player(props, 60.0);
    load(&mut player, &clock);
    player.play(None);
    player.on_mouse_enter();
    player.on_mouse_leave();
    run_for(&mut player, &clock, 600, 50);
    assert!(!player.state().show_controls);

    player.on_mouse_enter();
    assert!(player.state().show_controls);
}

#[test]
fn repeated_leaves_keep_a_single_deadline() {
    let props = mp4_props().with_autohide_delay(Duration::from_millis(500));
    let (mut player, clock) = sim_player(props, 60.0);
    load(&mut player, &clock);
    player.play(None);

    player.on_mouse_enter();
    player.on_mouse_leave();
    let deadline = player.hide_deadline();
    assert!(deadline.is_some());

    run_for(&mut player, &clock, 200, 50);
    player.on_mouse_enter();
    player.on_mouse_leave();
    assert_eq!(player.hide_deadline(), deadline);
}

#[test]
fn paused_player_never_hides_controls() {
    let props = mp4_props().with_autohide_delay(Duration::from_millis(500));
    let (mut player, clock) = sim_player(props, 60.0);
    load(&mut player, &clock);

    player.on_mouse_enter();
    player.on_mouse_leave();
    run_for(&mut player, &clock, 2000, 100);
    assert!(player.state().show_controls);
}

#[test]
fn unmount_cancels_pending_hide() {
    let props = mp4_props().with_autohide_delay(Duration::from_millis(500));
    let (mut player, clock) = sim_player(props, 60.0);
    load(&mut player, &clock);
    player.play(None);
    player.on_mouse_enter();
    player.on_mouse_leave();
    assert!(player.hide_pending());

    player.unmount();
    assert!(!player.hide_pending());
    run_for(&mut player, &clock, 1000, 100);
    assert!(player.state().show_controls);
}

// ============================================================================
// Construction options
// ============================================================================

#[test]
fn autoplay_starts_playing_with_hidden_controls() {
    let (mut player, clock) = sim_player(mp4_props().with_autoplay(true), 60.0);
    assert!(player.state().is_playing);
    assert!(!player.state().show_controls);
    assert!(player.media().is_playing());

    load(&mut player, &clock);
    assert_eq!(player.state().remaining_time, 60);
}

#[test]
fn muted_prop_mutes_the_media() {
    let (player, _clock) = sim_player(mp4_props().with_muted(true), 60.0);
    assert!(player.state().muted);
    assert!(player.media().muted());
    assert_eq!(player.view().sound_icon.classes(), "fa fa-volume-off");
}

// ============================================================================
// Playback progress
// ============================================================================

#[test]
fn progress_follows_playback() {
    let (mut player, clock) = sim_player(mp4_props(), 100.0);
    load(&mut player, &clock);
    assert_eq!(player.state().remaining_time, 100);

    player.play(None);
    run_for(&mut player, &clock, 10_000, 50);

    let state = player.state();
    assert!(state.progress > 9.0 && state.progress <= 10.5, "{}", state.progress);
    assert_eq!(state.remaining_time, 90);
    assert_eq!(player.view().remaining_label, "01:30");
}

#[test]
fn end_of_stream_pauses_and_shows_controls() {
    let props = mp4_props().with_autohide_delay(Duration::from_millis(500));
    let (mut player, clock) = sim_player(props, 2.0);
    load(&mut player, &clock);
    player.play(None);
    player.on_mouse_enter();
    player.on_mouse_leave();
    run_for(&mut player, &clock, 1000, 50);
    assert!(!player.state().show_controls);

    run_for(&mut player, &clock, 2000, 50);
    let state = player.state();
    assert!(!state.is_playing);
    assert!(state.show_controls);
    assert_eq!(state.remaining_time, 0);
    assert_eq!(state.progress, 100.0);
}

#[test]
fn scrubbing_seeks_and_plays() {
    let (mut player, clock) = sim_player(mp4_props(), 200.0);
    load(&mut player, &clock);

    player.on_scrub_change(25.0);
    assert!(player.state().is_playing);
    assert_eq!(player.state().progress, 25.0);
    assert_eq!(player.state().remaining_time, 150);
    assert_eq!(player.media().current_time(), 50.0);
}

#[test]
fn scrubbing_to_the_end_pauses() {
    let (mut player, clock) = sim_player(mp4_props(), 200.0);
    load(&mut player, &clock);
    player.play(None);

    player.on_scrub_change(SCRUB_MAX);
    assert!(!player.state().is_playing);
    assert!(!player.media().is_playing());
    assert_eq!(player.state().remaining_time, 0);
}

// ============================================================================
// Fullscreen
// ============================================================================

/// Backend whose fullscreen flag can be flipped from outside the player.
struct SharedBackend {
    active: Arc<AtomicBool>,
}

impl FullscreenBackend for SharedBackend {
    fn api(&self) -> FullscreenApi {
        FullscreenApi::Standard
    }

    fn is_available(&self) -> bool {
        true
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn request(&self, _target: &str) -> Result<(), BackendError> {
        self.active.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn exit(&self) -> Result<(), BackendError> {
        self.active.store(false, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn fullscreen_toggle_round_trip() {
    let (mut player, _clock) = sim_player(mp4_props(), 60.0);

    player.toggle_fullscreen();
    assert!(player.state().fullscreen);
    assert!(player.view().root_classes().contains("player--fullscreen"));

    player.toggle_fullscreen();
    assert!(!player.state().fullscreen);
}

#[test]
fn fullscreen_without_support_is_a_no_op() {
    let (mut player, _clock) = sim_player_with_backends(mp4_props(), 60.0, vec![]);

    player.enter_fullscreen();
    assert!(!player.state().fullscreen);
    player.exit_fullscreen();
    assert!(!player.state().fullscreen);
}

#[test]
fn external_fullscreen_exit_is_picked_up() {
    let active = Arc::new(AtomicBool::new(false));
    let backend = SharedBackend {
        active: active.clone(),
    };
    let (mut player, _clock) = sim_player_with_backends(mp4_props(), 60.0, vec![Box::new(backend)]);

    player.enter_fullscreen();
    assert!(player.state().fullscreen);

    active.store(false, Ordering::SeqCst);
    player.tick();
    assert!(!player.state().fullscreen);
}
