use serde_json::{json, to_string};
use vizij_carousel::{Event, Navigator};

#[derive(Debug)]
struct Slide {
    title: &'static str,
}

fn main() -> anyhow::Result<()> {
    let slides = vec![
        Slide { title: "intro" },
        Slide { title: "features" },
        Slide { title: "pricing" },
        Slide { title: "contact" },
    ];

    let mut nav = Navigator::new(slides)?.with_animation("slide", |slide: &Slide, opts| {
        println!("slide {:<10} {}", slide.title, to_string(opts)?);
        Ok(())
    });

    // Outgoing slides leave towards the side the user came from.
    nav.add_listener("slide", Event::Hide, |_, reverse, _| {
        Ok(json!({ "to": if reverse { "right" } else { "left" }, "opacity": 0.0 }))
    })?;
    nav.add_listener("slide", Event::Show, |_, reverse, index| {
        Ok(json!({ "from": if reverse { "left" } else { "right" }, "opacity": 1.0, "index": index }))
    })?;
    nav.add_listener("slide", Event::Show, |_, _, _| Ok(json!({ "duration_ms": 300 })))?;

    nav.initialize(|slide| println!("hide {}", slide.title));

    nav.next()?;
    nav.next()?;
    nav.previous()?;
    nav.go_to(-1)?;
    nav.next()?;

    println!("current: {}", nav.current_item().title);
    Ok(())
}
