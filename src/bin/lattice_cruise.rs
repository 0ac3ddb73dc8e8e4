// Lattice planner cruise scenario: target-speed tracking with static
// obstacle avoidance along a spline reference line.

use gnuplot::{AxesCommon, Caption, Color, Figure, PointSize, PointSymbol};

use lattice_planner::lattice::{CycleOutcome, DrivingMode, FrenetState, PlannerConfig, PlanningLoop};
use lattice_planner::utils::{colors, draw_vehicle};
use lattice_planner::{normalize_angle, CubicSpline2D, Obstacles, Pose2D, Trajectory, VehicleGeometry};

const SHOW_ANIMATION: bool = true;
const MAX_CYCLES: usize = 1000;

fn steering_angle(traj: &Trajectory, wheelbase: f64) -> f64 {
    if traj.yaw.len() > 2 && traj.ds[1] > 0.0 {
        let dyaw = (traj.yaw[2] - traj.yaw[1]) / traj.ds[1];
        normalize_angle((1.2 * wheelbase * dyaw).atan())
    } else {
        0.0
    }
}

fn draw_cycle(
    fig: &mut Figure,
    ref_line: &(Vec<f64>, Vec<f64>),
    obstacles: &Obstacles,
    traj: &Trajectory,
    vehicle: &VehicleGeometry,
    speed: f64,
) {
    if !SHOW_ANIMATION {
        return;
    }

    let steer = steering_angle(traj, vehicle.wheelbase);

    fig.clear_axes();
    let axes = fig.axes2d();
    axes.set_title(
        &format!(
            "Lattice Planner Cruising V[km/h]: {:.1} steer[deg]: {:.1}",
            speed * 3.6,
            steer.to_degrees()
        ),
        &[],
    )
    .set_x_label("x [m]", &[])
    .set_y_label("y [m]", &[])
    .set_aspect_ratio(gnuplot::AutoOption::Fix(1.0))
    .lines(&ref_line.0, &ref_line.1, &[Caption("Reference"), Color(colors::REFERENCE)])
    .points(
        &obstacles.x_coords(),
        &obstacles.y_coords(),
        &[Caption("Obstacles"), Color(colors::OBSTACLE), PointSymbol('O'), PointSize(2.0)],
    )
    .lines(&traj.x, &traj.y, &[Caption("Optimal trajectory"), Color(colors::OPTIMAL)]);

    let pose = Pose2D::new(traj.x[1], traj.y[1], traj.yaw[1]);
    draw_vehicle(axes, &pose, vehicle);

    fig.show_and_keep_running().unwrap();
}

fn main() {
    println!("Lattice planner cruise scenario start!!");

    // Reference waypoints
    let wx = vec![0.0, 25.0, 50.0, 80.0, 110.0, 140.0];
    let wy = vec![0.0, 12.0, -8.0, 6.0, -4.0, 0.0];
    let spline = CubicSpline2D::new(&wx, &wy).expect("reference waypoints are valid");

    let obstacles = Obstacles::from_xy(&[25.0, 50.0, 80.0, 110.0], &[15.0, -5.0, 9.0, -1.0]);
    let vehicle = VehicleGeometry::default();
    let config = PlannerConfig::default();

    // Dense reference line for display
    let mut ref_line = (Vec::new(), Vec::new());
    let mut s = 0.0;
    while s < spline.max_s() {
        let p = spline.calc_position(s);
        ref_line.0.push(p.x);
        ref_line.1.push(p.y);
        s += 0.5;
    }

    let goal = spline.calc_position(spline.max_s());
    let initial = FrenetState::new(0.0, 0.0, 0.0, 0.0, 30.0 / 3.6, 0.0);
    let mut planning = PlanningLoop::new(
        DrivingMode::Cruise {
            vehicle,
            obstacles: obstacles.clone(),
        },
        config,
        initial,
        goal,
    );

    let mut fig = Figure::new();

    for _ in 0..MAX_CYCLES {
        match planning.step(&spline) {
            CycleOutcome::Committed(traj) => {
                draw_cycle(&mut fig, &ref_line, &obstacles, &traj, &vehicle, planning.state().s_v);
            }
            CycleOutcome::GoalReached(traj) => {
                draw_cycle(&mut fig, &ref_line, &obstacles, &traj, &vehicle, planning.state().s_v);
                println!("Goal reached after {} cycles!", planning.cycles());
                break;
            }
            CycleOutcome::NoFeasiblePath => {
                println!("No feasible path found!!");
                break;
            }
        }
    }

    if SHOW_ANIMATION {
        std::fs::create_dir_all("img").unwrap_or_default();
        fig.save_to_svg("img/lattice_cruise.svg", 640, 480).unwrap();
        println!("Plot saved to img/lattice_cruise.svg");
    }

    println!("Lattice planner cruise scenario finish!!");
}
