use launch_countdown::physic_engine::confetti::{ConfettiPool, CONFETTI_RESPAWN_Y};
use launch_countdown::physic_engine::explosions::{ExplosionsPool, EXPLOSION_COLORS};
use launch_countdown::physic_engine::sparks::{SparksPool, SPARK_COLOR};
use launch_countdown::physic_engine::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

// ==================================
// 1. Confettis
// ==================================

#[test]
fn test_confetti_wraps_to_top_when_leaving_bottom() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut pool = ConfettiPool::new(2, WIDTH, HEIGHT, &mut rng);

    // Le premier sort par le bas, le second reste à l'écran
    pool.particles_mut()[0].pos = Vec2::new(400.0, HEIGHT + 21.0);
    pool.particles_mut()[1].pos = Vec2::new(100.0, 100.0);
    let velocity = pool.particles()[1].vel;

    pool.update(WIDTH, HEIGHT, &mut rng);

    let wrapped = pool.particles()[0];
    assert_eq!(wrapped.pos.y, CONFETTI_RESPAWN_Y);
    assert!(wrapped.pos.y < 0.0);
    assert!(
        (0.0..WIDTH).contains(&wrapped.pos.x),
        "respawned x out of window: {}",
        wrapped.pos.x
    );

    let falling = pool.particles()[1];
    assert_eq!(falling.pos, Vec2::new(100.0, 100.0) + velocity);
}

#[test]
fn test_confetti_never_dies() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut pool = ConfettiPool::new(300, WIDTH, HEIGHT, &mut rng);

    for _ in 0..2000 {
        pool.update(WIDTH, HEIGHT, &mut rng);
    }

    assert_eq!(pool.len(), 300);
    for p in pool.particles() {
        assert_eq!(p.alpha, 1.0);
        assert!(p.pos.y <= HEIGHT + 20.0, "confetti lost below screen: {}", p.pos.y);
    }
}

// ==================================
// 2. Étincelles
// ==================================

#[test]
fn test_sparks_fade_strictly() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut sparks = SparksPool::new(6, 0.03);

    assert_eq!(sparks.spawn(Vec2::new(400.0, 500.0), &mut rng), 6);
    for p in sparks.particles() {
        assert_eq!(p.color, SPARK_COLOR);
        assert!((380.0..420.0).contains(&p.pos.x));
        assert!(p.vel.y < 0.0, "sparks must be thrown upwards");
    }

    let mut previous: Vec<f32> = sparks.particles().iter().map(|p| p.alpha).collect();
    for _ in 0..30 {
        sparks.update();
        let current: Vec<f32> = sparks.particles().iter().map(|p| p.alpha).collect();
        assert_eq!(current.len(), previous.len());
        for (before, after) in previous.iter().zip(&current) {
            assert!(after < before, "alpha did not decrease: {} -> {}", before, after);
        }
        previous = current;
    }
}

#[test]
fn test_sparks_removed_once_faded() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut sparks = SparksPool::new(6, 0.03);
    sparks.spawn(Vec2::new(400.0, 500.0), &mut rng);

    for _ in 0..40 {
        sparks.update();
        assert!(sparks.particles().iter().all(|p| p.alpha > 0.0));
    }
    assert!(sparks.is_empty());
}

// ==================================
// 3. Explosions
// ==================================

#[test]
fn test_explosion_spawns_configured_count() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut explosions = ExplosionsPool::new(40, 0.02);
    let origin = Vec2::new(400.0, 300.0);

    assert_eq!(explosions.spawn(origin, &mut rng), 40);
    assert_eq!(explosions.len(), 40);

    for p in explosions.particles() {
        assert_eq!(p.pos, origin);
        let speed = p.vel.length();
        assert!((2.0 - 1e-4..6.0 + 1e-4).contains(&speed), "speed out of range: {}", speed);
        assert!(EXPLOSION_COLORS.contains(&p.color));
        assert!((2.0..6.0).contains(&p.size));
    }
}

#[test]
fn test_explosion_directions_cover_full_circle() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut explosions = ExplosionsPool::new(40, 0.02);
    for _ in 0..10 {
        explosions.spawn(Vec2::ZERO, &mut rng);
    }

    let mut buckets = [0usize; 8];
    for p in explosions.particles() {
        let angle = p.vel.y.atan2(p.vel.x).rem_euclid(std::f32::consts::TAU);
        let bucket = ((angle / std::f32::consts::TAU) * 8.0) as usize;
        buckets[bucket.min(7)] += 1;
    }
    assert!(
        buckets.iter().all(|&n| n > 0),
        "some directions never used: {:?}",
        buckets
    );
}

#[test]
fn test_explosion_lifetime_follows_decay() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut explosions = ExplosionsPool::new(40, 0.02);
    explosions.spawn(Vec2::new(10.0, 10.0), &mut rng);

    for _ in 0..45 {
        explosions.update();
    }
    assert_eq!(explosions.len(), 40, "explosion particles died too early");

    for _ in 0..10 {
        explosions.update();
    }
    assert!(explosions.is_empty());
}
