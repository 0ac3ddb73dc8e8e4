// Lattice planner stopping scenario: fixed-station approach with zero
// terminal velocity along a straight lane.

use gnuplot::{AxesCommon, Caption, Color, Figure, LineWidth};

use lattice_planner::lattice::{CycleOutcome, DrivingMode, FrenetState, PlannerConfig, PlanningLoop};
use lattice_planner::utils::{colors, draw_vehicle};
use lattice_planner::{CubicSpline2D, Point2D, Pose2D, Trajectory, VehicleGeometry};

const SHOW_ANIMATION: bool = true;
const MAX_CYCLES: usize = 1000;

fn draw_cycle(
    fig: &mut Figure,
    ref_line: &(Vec<f64>, Vec<f64>),
    stop_line_x: f64,
    traj: &Trajectory,
    vehicle: &VehicleGeometry,
    speed: f64,
) {
    if !SHOW_ANIMATION {
        return;
    }

    fig.clear_axes();
    let axes = fig.axes2d();
    axes.set_title(
        &format!("Lattice Planner Stopping V[km/h]: {:.1}", speed * 3.6),
        &[],
    )
    .set_x_label("x [m]", &[])
    .set_y_label("y [m]", &[])
    .set_aspect_ratio(gnuplot::AutoOption::Fix(1.0))
    .lines(&ref_line.0, &ref_line.1, &[Caption("Reference"), Color(colors::REFERENCE)])
    .lines(
        &[stop_line_x, stop_line_x],
        &[-4.0, 4.0],
        &[Caption("Stop line"), Color(colors::BOUNDARY), LineWidth(2.0)],
    )
    .lines(&traj.x, &traj.y, &[Caption("Optimal trajectory"), Color(colors::OPTIMAL)]);

    let pose = Pose2D::new(traj.x[1], traj.y[1], traj.yaw[1]);
    draw_vehicle(axes, &pose, vehicle);

    fig.show_and_keep_running().unwrap();
}

fn main() {
    println!("Lattice planner stopping scenario start!!");

    // Straight lane
    let wx = vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0];
    let wy = vec![0.0; 8];
    let spline = CubicSpline2D::new(&wx, &wy).expect("reference waypoints are valid");

    let vehicle = VehicleGeometry::default();
    let config = PlannerConfig::default();
    let stop_line_x = config.stop_station + 1.0;

    let mut ref_line = (Vec::new(), Vec::new());
    let mut s = 0.0;
    while s < spline.max_s() {
        let p = spline.calc_position(s);
        ref_line.0.push(p.x);
        ref_line.1.push(p.y);
        s += 0.5;
    }

    let goal = Point2D::new(stop_line_x, 0.0);
    let initial = FrenetState::new(0.0, 0.0, 0.0, 0.0, 30.0 / 3.6, 0.0);
    let mut planning = PlanningLoop::new(DrivingMode::Stopping, config, initial, goal);

    let mut fig = Figure::new();

    for _ in 0..MAX_CYCLES {
        match planning.step(&spline) {
            CycleOutcome::Committed(traj) => {
                draw_cycle(&mut fig, &ref_line, stop_line_x, &traj, &vehicle, planning.state().s_v);
            }
            CycleOutcome::GoalReached(traj) => {
                draw_cycle(&mut fig, &ref_line, stop_line_x, &traj, &vehicle, planning.state().s_v);
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
        fig.save_to_svg("img/lattice_stopping.svg", 640, 480).unwrap();
        println!("Plot saved to img/lattice_stopping.svg");
    }

    println!("Lattice planner stopping scenario finish!!");
}
