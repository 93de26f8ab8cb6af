use super::*;
use crate::geometry::collision::segment_crosses_triangle;
use ::config::constants::triangle_count_after;
use rand::rngs::{mock::StepRng, StdRng};
use rand::SeedableRng;

fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A floor face whose circumcenter sits at the origin, plus a wall at
/// `x = 0.5` that every edge from the origin toward `(1, 0, 0)` passes
/// through. A constant zero rng always picks the floor with a zero offset.
fn walled_mesh() -> Mesh {
    let floor = Triangle::new(
        DVec3::new(-1.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    );
    let wall = Triangle::new(
        DVec3::new(0.5, -1.0, -1.0),
        DVec3::new(0.5, 1.0, -1.0),
        DVec3::new(0.5, 0.0, 1.0),
    );
    Mesh::from_triangles(vec![floor, wall])
}

#[test]
fn test_triangle_count_follows_growth_count() {
    for growth_count in [0, 1, 2, 5, 20] {
        let mut rng = seeded_rng(growth_count as u64 + 100);
        let mesh = build_random_mesh(growth_count, &mut rng).expect("build succeeds");
        assert_eq!(mesh.triangle_count(), 4 + 2 * growth_count);
        assert_eq!(mesh.triangle_count(), triangle_count_after(growth_count));
    }
}

#[test]
fn test_grown_mesh_has_consistent_winding() {
    let mut rng = seeded_rng(21);
    let mesh = build_random_mesh(30, &mut rng).expect("build succeeds");
    assert!(mesh.validate_winding());
    assert!(mesh.validate_normals());
    assert!(mesh.triangles().iter().all(|tri| !tri.is_degenerate()));
}

#[test]
fn test_same_seed_builds_identical_meshes() {
    let a = build_random_mesh(15, &mut seeded_rng(99)).expect("build succeeds");
    let b = build_random_mesh(15, &mut seeded_rng(99)).expect("build succeeds");
    assert_eq!(a, b);

    let c = build_random_mesh(15, &mut seeded_rng(100)).expect("build succeeds");
    assert_ne!(a, c);
}

#[test]
fn test_accepted_edges_do_not_cross_existing_faces() {
    let mut rng = seeded_rng(5);
    let mut engine = GrowthEngine::seeded(&mut rng, GrowthConfig::default()).expect("seed");

    for _ in 0..25 {
        let before = engine.mesh().clone();
        let step = engine.grow(&mut rng).expect("step succeeds");
        let candidate = step.candidate;

        for (index, other) in before.iter().enumerate() {
            if index == candidate.face_index {
                continue;
            }
            for (start, end) in candidate.new_edges() {
                assert!(
                    !segment_crosses_triangle(other, start, end),
                    "step {} edge crosses face {index}",
                    step.step
                );
            }
        }
    }
}

#[test]
fn test_step_replaces_face_with_fan() {
    let mut rng = seeded_rng(8);
    let mut mesh = build_random_mesh(3, &mut rng).expect("build succeeds");
    let before = mesh.clone();

    let step = grow_step(&mut mesh, &mut rng, &GrowthConfig::default()).expect("step succeeds");
    assert_eq!(step.step, 3);
    assert_eq!(step.removed_face(), before.triangle(step.candidate.face_index));

    let mut expected: Vec<Triangle> = before
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != step.candidate.face_index)
        .map(|(_, t)| *t)
        .collect();
    expected.extend(step.candidate.fan());
    assert_eq!(mesh.triangles(), expected.as_slice());

    // Every new face meets at the growth point
    for tri in &mesh.triangles()[mesh.triangle_count() - 3..] {
        assert_eq!(tri.vertex(0), step.growth_point());
    }
}

#[test]
fn test_candidate_lies_within_circumradius() {
    let mut rng = seeded_rng(12);
    let mesh = build_random_mesh(4, &mut rng).expect("build succeeds");
    for _ in 0..200 {
        let candidate = GrowthCandidate::propose(&mesh, &mut rng).expect("proposal");
        let radius = candidate.circumcenter.distance(candidate.face.vertex(0));
        assert!(candidate.offset.length() <= radius + 1e-9);
        assert!(candidate.offset.dot(candidate.face.normal()) >= -1e-9);
        assert_eq!(candidate.growth_point, candidate.circumcenter + candidate.offset);
    }
}

#[test]
fn test_fan_normals_follow_formula() {
    let mesh = walled_mesh();
    let candidate =
        GrowthCandidate::for_face(&mesh, 0, &mut seeded_rng(1)).expect("proposal");
    let g = candidate.growth_point;
    let v = candidate.face.vertices();
    for (i, tri) in candidate.fan().iter().enumerate() {
        let a = v[i];
        let b = v[(i + 1) % 3];
        assert_eq!(tri.vertices(), &[g, a, b]);
        assert_eq!(tri.normal(), (a - g).cross(b - g).normalize_or_zero());
    }
}

#[test]
fn test_stalled_step_leaves_mesh_unchanged() {
    let mesh = walled_mesh();
    let config = GrowthConfig::default().with_max_attempts(25);
    let mut engine = GrowthEngine::from_mesh(mesh.clone(), config).expect("engine");

    let err = engine.grow(&mut StepRng::new(0, 0)).unwrap_err();
    assert_eq!(err, GrowthError::GrowthStalled { step: 0, attempts: 25 });
    assert_eq!(engine.mesh(), &mesh);
    assert_eq!(engine.steps(), 0);
    assert_eq!(engine.total_attempts(), 25);
}

#[test]
fn test_free_grow_step_stalls_too() {
    let mut mesh = walled_mesh();
    let before = mesh.clone();
    let config = GrowthConfig::default().with_max_attempts(3);
    let err = grow_step(&mut mesh, &mut StepRng::new(0, 0), &config).unwrap_err();
    assert!(matches!(err, GrowthError::GrowthStalled { attempts: 3, .. }));
    assert_eq!(mesh, before);
}

#[test]
fn test_empty_mesh_is_a_contract_violation() {
    let mut mesh = Mesh::new();
    let err = grow_step(&mut mesh, &mut seeded_rng(0), &GrowthConfig::default()).unwrap_err();
    assert!(matches!(err, GrowthError::ContractViolation { .. }));

    let err = GrowthEngine::from_mesh(Mesh::new(), GrowthConfig::default()).unwrap_err();
    assert!(matches!(err, GrowthError::ContractViolation { .. }));
}

#[test]
fn test_out_of_range_face_is_a_contract_violation() {
    let err = GrowthCandidate::for_face(&walled_mesh(), 2, &mut seeded_rng(0)).unwrap_err();
    assert!(matches!(err, GrowthError::ContractViolation { .. }));
}

#[test]
fn test_collinear_face_aborts_growth() {
    let mut mesh = Mesh::from_triangles(vec![Triangle::new(
        DVec3::ZERO,
        DVec3::X,
        DVec3::new(2.0, 0.0, 0.0),
    )]);
    let err = grow_step(&mut mesh, &mut seeded_rng(3), &GrowthConfig::default()).unwrap_err();
    assert!(matches!(err, GrowthError::DegenerateGeometry { .. }));
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn test_invalid_config_is_rejected_before_building() {
    let config = GrowthConfig::default().with_seed_range(-1.0);
    let err = build_random_mesh_with_config(3, &mut seeded_rng(1), &config).unwrap_err();
    assert!(matches!(err, GrowthError::InvalidConfig { .. }));
}

#[test]
fn test_growth_count_over_limit_is_rejected() {
    let err = build_random_mesh(MAX_TRIANGLES, &mut seeded_rng(1)).unwrap_err();
    assert!(matches!(err, GrowthError::TooManyTriangles { .. }));

    let err = build_random_mesh(usize::MAX, &mut seeded_rng(1)).unwrap_err();
    assert_eq!(
        err,
        GrowthError::TooManyTriangles {
            count: usize::MAX,
            max: MAX_TRIANGLES
        }
    );
}

#[test]
fn test_engine_tracks_steps_and_attempts() {
    let mut rng = seeded_rng(31);
    let mut engine = GrowthEngine::seeded(&mut rng, GrowthConfig::unbounded()).expect("seed");
    engine.grow_n(10, &mut rng).expect("growth succeeds");
    assert_eq!(engine.steps(), 10);
    assert!(engine.total_attempts() >= 10);
    assert_eq!(engine.into_mesh().triangle_count(), 24);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_builds_match_sequential() {
    let seeds = [1_u64, 2, 3, 4, 5, 6];
    let config = GrowthConfig::default();
    let parallel = build_random_meshes(&seeds, 8, &config);

    assert_eq!(parallel.len(), seeds.len());
    for (seed, result) in seeds.iter().zip(parallel) {
        let sequential = build_random_mesh_with_config(8, &mut seeded_rng(*seed), &config);
        assert_eq!(result, sequential);
    }
}
