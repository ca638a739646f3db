//! Shared components, resources, events, and states for Wanderglade.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE: top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Playing,
    /// A dialog line is on screen; the world is frozen until it is closed.
    Dialogue,
}

/// Ordering of the one-shot startup work. Later sets read what earlier
/// sets produced (canvas size, RNG, terrain).
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum StartupSet {
    Canvas,
    Terrain,
    Actors,
}

/// Per-frame gameplay order: the player moves, NPCs step, then the
/// interaction target is re-evaluated against the new positions.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Movement,
    Npcs,
    Interaction,
}

/// Chain the startup and per-frame sets. Called once by the world plugin
/// and by headless test apps.
pub fn configure_schedule_sets(app: &mut App) {
    app.configure_sets(
        Startup,
        (StartupSet::Canvas, StartupSet::Terrain, StartupSet::Actors).chain(),
    )
    .configure_sets(
        Update,
        (FrameSet::Movement, FrameSet::Npcs, FrameSet::Interaction).chain(),
    );
}

// ═══════════════════════════════════════════════════════════════════════
// CANVAS
// ═══════════════════════════════════════════════════════════════════════

/// Size of the drawing surface in pixels. Captured once at startup and
/// never updated on resize.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl Canvas {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Canvas space has its origin top-left with y pointing down; Bevy world
/// space has y pointing up. The camera sits over the canvas centre.
pub fn canvas_to_world(pos: Vec2) -> Vec2 {
    Vec2::new(pos.x, -pos.y)
}

// ═══════════════════════════════════════════════════════════════════════
// ACTORS
// ═══════════════════════════════════════════════════════════════════════

/// Marker for the user-controlled avatar.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// A wandering townsperson. `index` is the 0-based creation order.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    pub index: usize,
    pub name: String,
}

/// Position in canvas pixels. The single source of truth for where an
/// actor is; `Transform` is derived from it in PostUpdate.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasPosition(pub Vec2);

/// Round body shared by the player and NPCs.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub radius: f32,
    /// Player: pixels per key event. NPC: pixels per frame.
    pub speed: f32,
}

/// Fill colour of an actor or prop.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Tint(pub Color);

/// Steering state for an NPC walking between random points.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Wander {
    pub target: Vec2,
    /// Set at spawn, never read by any behaviour.
    pub heading: f32,
}

/// NPC entities in creation order. Interaction scans walk this list, so
/// the first NPC spawned wins ties.
#[derive(Resource, Debug, Clone, Default)]
pub struct NpcRoster {
    pub entities: Vec<Entity>,
}

/// The one RNG all gameplay randomness draws from. Seeded from config
/// when a seed is set, otherwise from OS entropy.
#[derive(Resource, Debug)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_seed(None)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════

/// Cardinal direction of a single player nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nudge {
    Up,
    Down,
    Left,
    Right,
}

impl Nudge {
    /// Unit step in canvas space (y grows downward).
    pub fn delta(self) -> Vec2 {
        match self {
            Nudge::Up => Vec2::new(0.0, -1.0),
            Nudge::Down => Vec2::new(0.0, 1.0),
            Nudge::Left => Vec2::new(-1.0, 0.0),
            Nudge::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Game actions produced from this frame's key-down events.
/// Reset at the start of every frame.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PlayerInput {
    /// One entry per key-down event, auto-repeat included, in arrival order.
    pub nudges: Vec<Nudge>,
    pub interact: bool,
    pub close_dialogue: bool,
}

/// Which set of actions the keyboard maps to right now.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputContext {
    #[default]
    Gameplay,
    Dialogue,
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub move_up: KeyCode,
    pub move_down: KeyCode,
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub interact: KeyCode,
    pub ui_confirm: KeyCode,
    pub ui_cancel: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: KeyCode::KeyW,
            move_down: KeyCode::KeyS,
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            interact: KeyCode::KeyE,
            ui_confirm: KeyCode::Enter,
            ui_cancel: KeyCode::Escape,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INTERACTION
// ═══════════════════════════════════════════════════════════════════════

/// The NPC the player is currently close enough to talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionTarget {
    pub entity: Entity,
    pub name: String,
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub target: Option<InteractionTarget>,
    pub dialog_open: bool,
    pub active_speaker: Option<Entity>,
    pub dialog_line: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone)]
pub struct DialogueStartEvent {
    pub npc: Entity,
    pub name: String,
    pub line: String,
}

#[derive(Event, Debug, Clone)]
pub struct DialogueEndEvent;

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 540.0;

pub const NPC_COUNT: usize = 10;

pub const PLAYER_RADIUS: f32 = 10.0;
pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_RGB: [u8; 3] = [0x00, 0x00, 0xFF];

pub const NPC_RADIUS: f32 = 5.0;
pub const NPC_SPEED: f32 = 2.0;
pub const NPC_RGB: [u8; 3] = [0xFF, 0x45, 0x00];

pub const MAP_WIDTH: u32 = 1000;
pub const MAP_HEIGHT: u32 = 1000;
pub const TILE_SIZE: f32 = 10.0;
pub const NOISE_SCALE: f64 = 0.1;

// Draw order: terrain, props, NPCs, then the player on top.
pub const Z_TERRAIN: f32 = 0.0;
pub const Z_DECOR: f32 = 1.0;
pub const Z_NPC: f32 = 2.0;
pub const Z_PLAYER: f32 = 3.0;

pub fn rgb(rgb: [u8; 3]) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}
