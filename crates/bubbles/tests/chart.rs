use bubbles::{
    Chart, ChartConfig, Command, Error, Mode, NullRender, Outcome, Point, Record, RenderSync,
    Scene, Tick,
};
use bubbles_core::build_nodes;
use futures::executor::block_on;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write as _;
use std::time::Duration;

const HEADER: &str = "id,nom,descr,img,group,total_amount,ministres,soutien,medias,politique\n";

fn records(rows: &str) -> Vec<Record> {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(HEADER.as_bytes()).expect("write header");
    file.write_all(rows.as_bytes()).expect("write rows");
    block_on(bubbles::load_dataset(file.path())).expect("dataset")
}

fn three() -> Vec<Record> {
    records(
        "\
1,Alpha,Grand donateur,alpha.jpg,ps,100,oui,Hollande,oui,Elus
2,Beta,Moyen,beta.jpg,cd,50,non,Sarkozy,non,Autres
3,Gamma,Petit,gamma.jpg,verts,10,non,indéterminé,non,Cabinets ministériels
",
    )
}

fn seeded_config() -> ChartConfig {
    ChartConfig {
        seed: Some(7),
        ..ChartConfig::default()
    }
}

fn scene_for(config: &ChartConfig) -> Scene {
    Scene::new(
        config.width,
        config.height,
        Duration::from_millis(config.grow_in_ms),
    )
}

#[test]
fn split_mode_settles_each_bucket_on_its_anchor() {
    let config = seeded_config();
    let mut chart = Chart::new(&three(), &config, scene_for(&config)).expect("chart");
    chart.run_to_convergence(10_000);

    let outcome = chart
        .dispatch(Command::SwitchMode("media".to_string()))
        .expect("switch");
    assert_eq!(outcome, Outcome::Switched(Mode::Media));
    let ticks = chart.run_to_convergence(10_000);
    assert_eq!(ticks, config.force_options().ticks_to_converge() - 1);
    assert!(!chart.is_running());
    assert_eq!(chart.tick(), Tick::Idle);

    let left = Point::new(config.width / 3.0, config.height / 2.0);
    let right = Point::new(2.0 * config.width / 3.0, config.height / 2.0);
    let tolerance = 0.05 * config.width;
    let at = |id: &str| {
        let n = chart.node(id).expect("node");
        (Point::new(n.x(), n.y()), n.radius())
    };

    let (a, _) = at("1");
    let (b, rb) = at("2");
    let (c, rc) = at("3");
    assert!(a.distance(left) < tolerance, "{a:?} vs {left:?}");
    assert!(b.distance(right) < tolerance, "{b:?} vs {right:?}");
    assert!(c.distance(right) < tolerance, "{c:?} vs {right:?}");
    // Charge and pull balance leaves bubbles sharing an anchor partly overlapping, never
    // closer than about two thirds of their radius sum.
    assert!(b.distance(c) >= 0.65 * (rb + rc), "bubbles 2 and 3 overlap");

    for node in chart.nodes() {
        let bubble = chart.render().bubble(node.id()).expect("bubble");
        assert_eq!((bubble.cx, bubble.cy), (node.x(), node.y()));
    }
}

#[test]
fn default_mode_gathers_everyone_around_the_center() {
    let config = ChartConfig {
        seed: Some(11),
        ..ChartConfig::default()
    };
    let mut chart = Chart::new(&three(), &config, NullRender).expect("chart");
    assert_eq!(chart.mode(), Mode::Default);
    chart.run_to_convergence(10_000);

    let center = config.center();
    for node in chart.nodes() {
        let d = Point::new(node.x(), node.y()).distance(center);
        assert!(d < 0.1 * config.width, "node {} ended {d} from the center", node.id());
    }
}

#[test]
fn prebuilt_nodes_still_go_through_config_validation() {
    let nodes = build_nodes(
        &three(),
        &ChartConfig::default(),
        &mut StdRng::seed_from_u64(1),
    )
    .expect("nodes");
    let config = ChartConfig {
        damper: f64::NAN,
        ..seeded_config()
    };
    let err = Chart::from_nodes(nodes, &config, NullRender).expect_err("invalid config");
    assert!(matches!(
        err,
        Error::Data(bubbles_core::Error::InvalidConfig { .. })
    ));
}

#[test]
fn nodes_are_ordered_largest_first() {
    let config = seeded_config();
    let chart = Chart::new(&three(), &config, NullRender).expect("chart");
    let ids: Vec<_> = chart.nodes().iter().map(|n| n.id()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    let radii: Vec<_> = chart.nodes().iter().map(|n| n.radius()).collect();
    assert!(radii.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn switching_never_moves_a_bubble() {
    let config = seeded_config();
    let mut chart = Chart::new(&three(), &config, NullRender).expect("chart");
    for _ in 0..40 {
        chart.tick();
    }
    let before: Vec<_> = chart.nodes().iter().map(|n| (n.x(), n.y())).collect();

    chart.switch_mode("elu").expect("switch");
    let first: Vec<_> = chart.nodes().iter().map(|n| (n.x(), n.y())).collect();
    chart.switch_mode("elu").expect("switch");
    let second: Vec<_> = chart.nodes().iter().map(|n| (n.x(), n.y())).collect();

    assert_eq!(before, first);
    assert_eq!(first, second);
    assert!(chart.is_running());
    assert_eq!(chart.alpha(), config.physics.alpha_start);
}

#[test]
fn switch_swaps_labels_description_and_active_trigger() {
    let config = seeded_config();
    let mut chart = Chart::new(&three(), &config, scene_for(&config)).expect("chart");
    assert!(chart.render().labels().is_empty());
    assert_eq!(chart.render().active_trigger(), Some("all"));
    assert_eq!(chart.render().description(), Mode::Default.description());

    chart.switch_mode("soutien").expect("switch");
    let texts: Vec<_> = chart
        .render()
        .labels()
        .iter()
        .map(|l| (l.class.as_str(), l.text.as_str()))
        .collect();
    assert_eq!(
        texts,
        [
            ("soutien", "Sarkozy"),
            ("soutien", "indéterminé"),
            ("soutien", "Hollande")
        ]
    );

    chart.switch_mode("ministre").expect("switch");
    assert_eq!(chart.render().labels().len(), 2);
    assert!(chart.render().labels().iter().all(|l| l.class == "ministre"));
    assert_eq!(chart.render().active_trigger(), Some("ministre"));
    assert_eq!(chart.render().description(), Mode::Ministry.description());
}

#[test]
fn unknown_trigger_falls_back_to_the_default_mode() {
    let config = seeded_config();
    let mut chart = Chart::new(&three(), &config, scene_for(&config)).expect("chart");
    chart.switch_mode("media").expect("switch");

    let outcome = chart
        .dispatch(Command::SwitchMode("régions".to_string()))
        .expect("fallback");
    assert_eq!(outcome, Outcome::Switched(Mode::Default));
    assert!(chart.render().labels().is_empty());
    assert_eq!(chart.render().active_trigger(), Some("all"));
}

#[test]
fn hover_shows_and_clears_the_detail_of_bubble_seven() {
    let rows = "\
7,Jeanne Martin,Conseillère régionale,martin.jpg,g,30,non,Hollande,oui,Elus
8,Paul Durand,Éditorialiste,durand.jpg,medium,20,non,indéterminé,oui,Autres
";
    let config = seeded_config();
    let mut chart = Chart::new(&records(rows), &config, scene_for(&config)).expect("chart");

    let Outcome::Detail(detail) = chart
        .dispatch(Command::HoverEnter("7".to_string()))
        .expect("hover")
    else {
        panic!("expected a detail");
    };
    assert_eq!(detail.name, "Jeanne Martin");
    assert_eq!(detail.description, "Conseillère régionale");
    assert_eq!(detail.image, "martin.jpg");
    let tooltip = chart.render().tooltip().expect("tooltip");
    assert_eq!(tooltip.node_id, "7");
    assert!(tooltip.html.contains("img/tetes/martin.jpg"));

    let outcome = chart
        .dispatch(Command::HoverExit("7".to_string()))
        .expect("exit");
    assert_eq!(outcome, Outcome::Cleared);
    assert!(chart.render().tooltip().is_none());
    assert!(!chart.render().bubble("7").expect("bubble").hovered);
}

#[test]
fn hovering_an_unknown_bubble_is_an_error() {
    let mut chart = Chart::new(&three(), &seeded_config(), NullRender).expect("chart");
    let err = chart.hover_enter("404").expect_err("unknown");
    assert!(matches!(err, Error::UnknownNode { id } if id == "404"));
}

#[test]
fn unanchored_category_prevents_construction() {
    let rows = "1,Alpha,,a.jpg,ps,100,oui,Bayrou,oui,Elus\n";
    let err = Chart::new(&records(rows), &seeded_config(), NullRender).expect_err("fatal");
    assert!(matches!(
        err,
        Error::Data(bubbles_core::Error::UnknownCategory { .. })
    ));
}

#[test]
fn duplicate_ids_are_rejected() {
    let rows = "\
1,Alpha,,a.jpg,ps,100,oui,Hollande,oui,Elus
1,Alpha bis,,b.jpg,ps,50,non,Sarkozy,non,Autres
";
    let err = Chart::new(&records(rows), &seeded_config(), NullRender).expect_err("duplicate");
    assert!(matches!(err, Error::DuplicateNode { id } if id == "1"));
}

#[test]
fn ticks_reach_the_renderer() {
    struct Counting(usize);
    impl RenderSync for Counting {
        fn create_bubble(&mut self, _node: &bubbles::Node) {}
        fn move_bubbles(&mut self, _nodes: &[bubbles::Node]) {
            self.0 += 1;
        }
        fn remove_bubble(&mut self, _id: &str) {}
        fn show_labels(&mut self, _class: &str, _labels: &[bubbles::Label]) {}
        fn hide_labels(&mut self, _class: &str) {}
        fn show_detail(&mut self, _id: &str, _detail: &bubbles::Detail) {}
        fn hide_detail(&mut self, _id: &str) {}
        fn set_description(&mut self, _text: &str) {}
        fn set_active_trigger(&mut self, _trigger: &str) {}
    }

    let mut chart = Chart::new(&three(), &seeded_config(), Counting(0)).expect("chart");
    let ticks = chart.run_to_convergence(25);
    assert_eq!(ticks, 25);
    assert_eq!(chart.render().0, 25);
    chart.stop();
    assert_eq!(chart.tick(), Tick::Idle);
    assert_eq!(chart.into_render().0, 25);
}
