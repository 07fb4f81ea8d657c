use glam::{IVec2, UVec2, Vec2};

/// 2D viewport over the map: tracks a world-space center and produces the
/// top-left offset that `Walkabout::blit` subtracts from entity positions.
pub struct Camera {
    /// World-space pixel position the camera is centered on.
    pub position: Vec2,
    /// Visible area in pixels.
    pub viewport: UVec2,
    /// Fraction of the remaining distance covered per second when following
    /// (`0` disables smoothing and snaps).
    pub follow_speed: f32,
}

impl Camera {
    pub fn new(viewport_w: u32, viewport_h: u32) -> Self {
        Self {
            position: Vec2::new(viewport_w as f32 / 2.0, viewport_h as f32 / 2.0),
            viewport: UVec2::new(viewport_w, viewport_h),
            follow_speed: 0.0,
        }
    }

    /// Move toward `target` (world pixels). Snaps when `follow_speed` is 0,
    /// otherwise lerps by `follow_speed * dt`, clamped to 1.
    pub fn follow(&mut self, target: Vec2, dt: f32) {
        if self.follow_speed <= 0.0 {
            self.position = target;
            return;
        }
        self.position += (target - self.position) * (self.follow_speed * dt).min(1.0);
    }

    /// Keep the view inside a world of `world` pixels. A world smaller than
    /// the viewport pins the view to the origin on that axis.
    pub fn clamp_to(&mut self, world: UVec2) {
        let half = self.viewport.as_vec2() / 2.0;
        let max = (world.as_vec2() - half).max(half);
        self.position = self.position.clamp(half, max);
    }

    /// World-space pixel coordinate of the viewport's top-left corner.
    pub fn offset(&self) -> IVec2 {
        (self.position - self.viewport.as_vec2() / 2.0).round().as_ivec2()
    }
}
