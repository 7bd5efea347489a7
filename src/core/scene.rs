use super::banner::{banner_transform, BannerState};
use super::camera::Camera;
use super::card::{CardEvent, CardState, Navigator};
use super::carousel;
use super::constants::*;
use super::geometry::{self, Mesh};
use super::pick;
use super::profile::ViewportProfile;
use super::rig::RigState;
use super::scroll::{ScrollConfig, ScrollControls, ScrollState};
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;
use std::rc::Rc;

/// Depth fog, faded with a smoothstep between `near` and `far`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: [f32; 3],
    pub near: f32,
    pub far: f32,
}

impl Fog {
    /// Fog contribution in `[0, 1]` at view-space distance `depth`.
    pub fn factor(&self, depth: f32) -> f32 {
        let span = (self.far - self.near).max(f32::EPSILON);
        let t = ((depth - self.near) / span).clamp(0.0, 1.0);
        t * t * (3.0 - 2.0 * t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub preset: &'static str,
    pub background_blur: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub card_count: usize,
    pub radius: f32,
    pub scroll: ScrollConfig,
    pub fog: Fog,
    pub environment: Environment,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            card_count: CARD_COUNT,
            radius: CAROUSEL_RADIUS,
            scroll: ScrollConfig::default(),
            fog: Fog {
                color: FOG_COLOR,
                near: FOG_NEAR,
                far: FOG_FAR,
            },
            environment: Environment {
                preset: ENVIRONMENT_PRESET,
                background_blur: ENVIRONMENT_BLUR,
            },
        }
    }
}

/// Inputs gathered by the host for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Pointer in normalized device coordinates, `y` up. `None` while no
    /// pointer is over the canvas.
    pub pointer: Option<Vec2>,
    /// Scroll gesture accumulated since the previous frame.
    pub scroll_pixels: f32,
    pub viewport_height: f32,
    pub aspect: f32,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            pointer: None,
            scroll_pixels: 0.0,
            viewport_height: 1.0,
            aspect: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(usize),
    Leave(usize),
}

pub type HoverEvents = SmallVec<[HoverEvent; 2]>;

/// Hover transitions when the card under the pointer changes.
pub fn hover_transition(previous: Option<usize>, next: Option<usize>) -> HoverEvents {
    let mut events = HoverEvents::new();
    if previous == next {
        return events;
    }
    if let Some(i) = previous {
        events.push(HoverEvent::Leave(i));
    }
    if let Some(i) = next {
        events.push(HoverEvent::Enter(i));
    }
    events
}

/// The whole carousel scene: rig, cards, banner and scroll range.
///
/// Built once from a [`ViewportProfile`]; afterwards it only changes through
/// [`Scene::update`], which returns the next scene instead of mutating.
#[derive(Clone, Debug)]
pub struct Scene {
    pub profile: ViewportProfile,
    pub config: SceneConfig,
    pub scroll: ScrollControls,
    pub rig: RigState,
    pub cards: Vec<CardState>,
    pub banner: BannerState,
    pub hovered: Option<usize>,
    pub aspect: f32,
    card_mesh: Rc<Mesh>,
    banner_mesh: Rc<Mesh>,
}

impl Scene {
    pub fn new(profile: ViewportProfile, config: SceneConfig) -> Self {
        let cards = carousel::layout(config.card_count, config.radius, profile.device)
            .into_iter()
            .map(|d| CardState::new(d, profile.card_scale))
            .collect();
        let card_mesh = geometry::bent_plane(
            CARD_BEND,
            CARD_WIDTH,
            CARD_HEIGHT,
            CARD_SEGMENTS,
            CARD_SEGMENTS,
        );
        let banner_mesh = geometry::open_cylinder(
            BANNER_RADIUS,
            BANNER_HEIGHT,
            BANNER_RADIAL_SEGMENTS,
            BANNER_HEIGHT_SEGMENTS,
        );
        Self {
            profile,
            scroll: ScrollControls::new(config.scroll),
            config,
            rig: RigState::new(profile.camera_position),
            cards,
            banner: BannerState::default(),
            hovered: None,
            aspect: 1.0,
            card_mesh: Rc::new(card_mesh),
            banner_mesh: Rc::new(banner_mesh),
        }
    }

    #[inline]
    pub fn card_mesh(&self) -> &Mesh {
        &self.card_mesh
    }

    #[inline]
    pub fn banner_mesh(&self) -> &Mesh {
        &self.banner_mesh
    }

    #[inline]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    pub fn camera(&self) -> Camera {
        self.rig.camera(self.profile.fov_degrees, self.aspect)
    }

    pub fn card_world_transform(&self, index: usize) -> Option<Mat4> {
        let group = self.rig.group_transform();
        self.cards.get(index).map(|c| group * c.local_transform())
    }

    pub fn card_world_transforms(&self) -> impl Iterator<Item = Mat4> + '_ {
        let group = self.rig.group_transform();
        self.cards.iter().map(move |c| group * c.local_transform())
    }

    #[inline]
    pub fn banner_transform(&self) -> Mat4 {
        banner_transform()
    }

    /// Card indices ordered farthest-first from the camera, for blending.
    pub fn cards_back_to_front(&self) -> Vec<usize> {
        let eye = self.rig.camera_position;
        let mut order: Vec<(usize, f32)> = self
            .card_world_transforms()
            .enumerate()
            .map(|(i, m)| (i, m.transform_point3(Vec3::ZERO).distance_squared(eye)))
            .collect();
        order.sort_by(|a, b| b.1.total_cmp(&a.1));
        order.into_iter().map(|(i, _)| i).collect()
    }

    /// Card under the pointer for this scene's camera, nearest first.
    pub fn hit_test(&self, pointer: Vec2) -> Option<usize> {
        let ray = self.camera().ray_through(pointer);
        pick::nearest_hit(&ray, &self.card_mesh, self.card_world_transforms()).map(|(i, _)| i)
    }

    /// Advance one frame: scroll, rig, hit test, card easing, banner.
    pub fn update(&self, dt: f32, input: &FrameInput) -> (Scene, HoverEvents) {
        let dt = dt.max(0.0);
        let mut scroll = self.scroll.clone();
        scroll.scroll_by_pixels(input.scroll_pixels, input.viewport_height);
        let scroll = scroll.update(dt);
        let scroll_state = scroll.state();

        let mut next = Scene {
            scroll,
            rig: self
                .rig
                .update(scroll_state.offset, input.pointer.unwrap_or(Vec2::ZERO), dt),
            aspect: input.aspect.max(1e-3),
            ..self.clone()
        };

        // Refresh hover every frame so camera motion alone can change it.
        let hit = input.pointer.and_then(|p| next.hit_test(p));
        let events = hover_transition(self.hovered, hit);
        for event in &events {
            match *event {
                HoverEvent::Enter(i) => next.cards[i].handle(CardEvent::Enter),
                HoverEvent::Leave(i) => next.cards[i].handle(CardEvent::Leave),
            }
        }
        next.hovered = hit;

        next.cards = next.cards.iter().map(|c| c.update(dt)).collect();
        next.banner = self.banner.update(scroll_state.delta, dt);
        (next, events)
    }

    /// Resolve a click at `pointer` and forward it to the card under it.
    /// Returns whether a card was hit.
    pub fn click(&self, pointer: Vec2, navigator: &mut dyn Navigator) -> bool {
        match self.hit_test(pointer).and_then(|i| self.cards.get(i)) {
            Some(card) => {
                card.click(navigator);
                true
            }
            None => false,
        }
    }
}
