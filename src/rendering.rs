//! Render sink: consumes [`FrameSnapshot`]s and draws them.
//!
//! ## Layer Model
//!
//! | Layer              | Technology | Source                   |
//! |--------------------|------------|--------------------------|
//! | Asteroid outlines  | Gizmos     | `snapshot.asteroids`     |
//! | Ship hull + centre | Gizmos     | `snapshot.ship`          |
//! | Projectiles        | Gizmos     | `snapshot.projectiles`   |
//! | Score HUD          | Bevy UI    | `snapshot.score`         |
//! | Game-over banner   | Bevy UI    | `snapshot.game_over`     |
//!
//! ## System Responsibilities
//!
//! | System                      | Schedule | Purpose                                |
//! |-----------------------------|----------|----------------------------------------|
//! | `setup_camera`              | Startup  | Spawn the 2D camera                    |
//! | `setup_hud`                 | Startup  | Spawn score text and hidden banner     |
//! | `sync_field_bounds_system`  | Startup, Update | Copy window size into `FieldBounds` |
//! | `cache_snapshot_system`     | Update   | Keep the newest snapshot for redraws   |
//! | `asteroid_gizmo_system`     | Update   | Draw asteroid circles                  |
//! | `player_gizmo_system`       | Update   | Draw ship and projectiles              |
//! | `hud_display_system`        | Update   | Refresh score and game-over banner     |
//!
//! Gizmos are immediate-mode, so the last snapshot is cached and redrawn every
//! frame, including after game over when no new snapshots arrive.

use crate::constants::{GAME_OVER_FONT_SIZE, HUD_FONT_SIZE};
use crate::graphics::{canvas_to_world, setup_camera};
use crate::player::player_gizmo_system;
use crate::simulation::{start_session_system, FieldBounds, FrameSnapshot, GameSet};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

// ── Resources & markers ───────────────────────────────────────────────────────

/// Most recent snapshot published by the simulation step.
#[derive(Resource, Debug, Clone, Default)]
pub struct LatestSnapshot(pub Option<FrameSnapshot>);

/// Marker for the score text node.
#[derive(Component)]
pub struct HudScoreDisplay;

/// Marker for the game-over overlay root (toggled visible on game over).
#[derive(Component)]
pub struct GameOverBanner;

/// Marker for the game-over text inside the banner.
#[derive(Component)]
pub struct GameOverText;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Window-backed presentation.  Requires `DefaultPlugins`.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LatestSnapshot>()
            .add_systems(
                Startup,
                (
                    setup_camera,
                    setup_hud,
                    sync_field_bounds_system.before(start_session_system),
                ),
            )
            .add_systems(Update, sync_field_bounds_system.in_set(GameSet::Input))
            .add_systems(
                Update,
                (
                    cache_snapshot_system,
                    (asteroid_gizmo_system, player_gizmo_system, hud_display_system),
                )
                    .chain()
                    .in_set(GameSet::Render),
            );
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Copy the primary window's logical size into [`FieldBounds`].
pub fn sync_field_bounds_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut bounds: ResMut<FieldBounds>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let current = FieldBounds::new(window.width(), window.height());
    if *bounds != current {
        debug!("Field resized to {}x{}", current.width, current.height);
        *bounds = current;
    }
}

/// Keep only the newest snapshot from this frame.
pub fn cache_snapshot_system(
    mut snapshots: MessageReader<FrameSnapshot>,
    mut latest: ResMut<LatestSnapshot>,
) {
    if let Some(snapshot) = snapshots.read().last() {
        latest.0 = Some(snapshot.clone());
    }
}

/// Draw every asteroid as a white circle outline.
pub fn asteroid_gizmo_system(
    mut gizmos: Gizmos,
    latest: Res<LatestSnapshot>,
    bounds: Res<FieldBounds>,
) {
    let Some(snapshot) = &latest.0 else {
        return;
    };
    for disc in &snapshot.asteroids {
        gizmos.circle_2d(
            canvas_to_world(disc.center, *bounds),
            disc.radius,
            Color::WHITE,
        );
    }
}

/// Spawn the permanent score HUD and the (hidden) game-over banner.
pub fn setup_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Score: 0"),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.88, 0.45)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        HudScoreDisplay,
    ));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
            GameOverBanner,
        ))
        .with_children(|banner| {
            banner.spawn((
                Text::new("GAME OVER"),
                TextFont {
                    font_size: GAME_OVER_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.22, 0.22)),
                GameOverText,
            ));
        });
}

/// Refresh the score text and reveal the banner once the session has ended.
#[allow(clippy::type_complexity)]
pub fn hud_display_system(
    latest: Res<LatestSnapshot>,
    mut q_score: Query<&mut Text, (With<HudScoreDisplay>, Without<GameOverText>)>,
    mut q_banner_text: Query<&mut Text, (With<GameOverText>, Without<HudScoreDisplay>)>,
    mut q_banner: Query<&mut Visibility, With<GameOverBanner>>,
) {
    if !latest.is_changed() {
        return;
    }
    let Some(snapshot) = &latest.0 else {
        return;
    };

    for mut text in q_score.iter_mut() {
        *text = Text::new(format!("Score: {}", snapshot.score));
    }

    if snapshot.game_over {
        for mut text in q_banner_text.iter_mut() {
            *text = Text::new(format!(
                "GAME OVER\nScore: {} ({} destroyed)",
                snapshot.score, snapshot.destroyed
            ));
        }
        for mut visibility in q_banner.iter_mut() {
            *visibility = Visibility::Visible;
        }
    }
}
