// Drifting star field plus occasional shooting streaks, drawn behind the
// hero section. Only the simulation lives here; canvas glue is in
// components::star_canvas.

use std::f64::consts::PI;

pub const STAR_COUNT: usize = 150;
pub const TIME_STEP: f64 = 0.016;
pub const STREAK_CHANCE: f64 = 0.003;
pub const STREAK_DECAY: f64 = 0.008;

pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
    pub opacity: f64,
    pub twinkle: f64,
}

impl Star {
    pub fn alpha_at(&self, time: f64) -> f64 {
        self.opacity * ((time * self.twinkle * 100.0).sin() * 0.3 + 0.7)
    }
}

pub struct Streak {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub speed: f64,
    pub angle: f64,
    pub opacity: f64,
    pub life: f64,
}

impl Streak {
    pub fn tip(&self) -> (f64, f64) {
        (
            self.x + self.angle.cos() * self.length,
            self.y + self.angle.sin() * self.length,
        )
    }
}

// xorshift32, plenty for decoration and deterministic under test.
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0xDEAD_BEEF } else { seed },
        }
    }

    fn next_f64(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        (self.state >> 8) as f64 * (1.0 / 16_777_216.0)
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

pub struct StarField {
    width: f64,
    height: f64,
    time: f64,
    stars: Vec<Star>,
    streaks: Vec<Streak>,
    rng: XorShift32,
}

impl StarField {
    pub fn new(width: f64, height: f64, count: usize, seed: u32) -> Self {
        let mut rng = XorShift32::new(seed);
        let stars = (0..count)
            .map(|_| Star {
                x: rng.next_f64() * width,
                y: rng.next_f64() * height,
                radius: rng.range(1.0, 3.0),
                speed: rng.range(0.1, 0.6),
                opacity: rng.range(0.2, 1.0),
                twinkle: rng.range(0.01, 0.03),
            })
            .collect();
        Self {
            width,
            height,
            time: 0.0,
            stars,
            streaks: Vec::new(),
            rng,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn streaks(&self) -> &[Streak] {
        &self.streaks
    }

    // One animation frame. Simulation time advances by a fixed nominal step
    // rather than measured wall time.
    pub fn step(&mut self) {
        self.time += TIME_STEP;

        // Stars twinkle at individual rates but sway in lockstep: the
        // horizontal perturbation shares one phase across the field.
        let sway = (self.time * 0.1).sin() * 0.1;
        for star in &mut self.stars {
            star.y += star.speed * 0.1;
            star.x += sway;
            // Recycle in place once a star leaves the bottom edge.
            if star.y > self.height {
                star.y = -5.0;
                star.x = self.rng.next_f64() * self.width;
            }
        }

        if self.rng.next_f64() < STREAK_CHANCE {
            let x = self.rng.next_f64() * self.width;
            let y = self.rng.next_f64() * self.height * 0.3;
            let length = self.rng.range(50.0, 130.0);
            let speed = self.rng.range(12.0, 20.0);
            let angle = self.rng.range(PI * 0.15, PI * 0.45);
            self.streaks.push(Streak {
                x,
                y,
                length,
                speed,
                angle,
                opacity: 1.0,
                life: 1.0,
            });
        }

        for streak in &mut self.streaks {
            streak.x += streak.angle.cos() * streak.speed;
            streak.y += streak.angle.sin() * streak.speed;
            streak.life -= STREAK_DECAY;
        }
        // Compact survivors instead of removing mid-iteration.
        self.streaks.retain(|streak| streak.life > 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_is_recycled_never_resized() {
        let mut field = StarField::new(800.0, 600.0, STAR_COUNT, 42);
        for _ in 0..10_000 {
            field.step();
            assert_eq!(field.stars().len(), STAR_COUNT);
        }
    }

    #[test]
    fn stars_fall_monotonically_then_wrap_above_the_top() {
        // Short surface so every star wraps at least once within the run.
        let mut field = StarField::new(800.0, 50.0, 10, 7);
        let mut previous: Vec<f64> = field.stars().iter().map(|s| s.y).collect();
        let mut wraps = 0;

        for _ in 0..60_000 {
            field.step();
            for (star, prev) in field.stars().iter().zip(&previous) {
                if star.y < *prev {
                    // Wrap event: back above the top, fresh x inside bounds.
                    assert_eq!(star.y, -5.0);
                    assert!(star.x >= 0.0 && star.x < field.width());
                    wraps += 1;
                } else {
                    assert!(star.y >= *prev);
                }
            }
            previous = field.stars().iter().map(|s| s.y).collect();
        }
        assert!(wraps >= 10, "expected every star to wrap, saw {wraps} wraps");
    }

    #[test]
    fn streak_life_decays_by_the_fixed_step() {
        let mut field = StarField::new(800.0, 600.0, 0, 3);
        field.streaks.push(Streak {
            x: 100.0,
            y: 50.0,
            length: 80.0,
            speed: 15.0,
            angle: PI * 0.25,
            opacity: 1.0,
            life: 1.0,
        });
        let before = field.streaks[0].life;
        field.step();
        let after = field.streaks[0].life;
        assert!((before - after - STREAK_DECAY).abs() < 1e-12);
    }

    #[test]
    fn dead_streaks_are_gone_in_the_next_frame() {
        let mut field = StarField::new(800.0, 600.0, 0, 11);
        field.streaks.push(Streak {
            x: 100.0,
            y: 50.0,
            length: 80.0,
            speed: 15.0,
            angle: PI * 0.25,
            opacity: 1.0,
            life: STREAK_DECAY / 2.0,
        });
        field.step();
        assert!(
            field.streaks().iter().all(|s| s.life > 0.0),
            "no stale streaks may survive a step"
        );
    }

    #[test]
    fn spawn_rate_converges_to_the_per_frame_probability() {
        let mut field = StarField::new(800.0, 600.0, 0, 99);
        let frames = 200_000;
        let mut spawned = 0;
        for _ in 0..frames {
            field.step();
            spawned += field.streaks().len();
            // Drain so each frame observes only its own spawn.
            field.streaks.clear();
        }
        let expected = frames as f64 * STREAK_CHANCE;
        let tolerance = 4.0 * (frames as f64 * STREAK_CHANCE).sqrt();
        assert!(
            (spawned as f64 - expected).abs() < tolerance,
            "saw {spawned} spawns, expected about {expected}"
        );
    }

    #[test]
    fn resize_preserves_the_population() {
        let mut field = StarField::new(800.0, 600.0, STAR_COUNT, 5);
        field.resize(320.0, 480.0);
        for _ in 0..1_000 {
            field.step();
        }
        assert_eq!(field.stars().len(), STAR_COUNT);
    }

    #[test]
    fn twinkle_stays_inside_the_opacity_envelope() {
        let field = StarField::new(800.0, 600.0, STAR_COUNT, 21);
        for frame in 0..1_000 {
            let time = frame as f64 * TIME_STEP;
            for star in field.stars() {
                let alpha = star.alpha_at(time);
                assert!(alpha > 0.0 && alpha <= star.opacity);
            }
        }
    }
}
