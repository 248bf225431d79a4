// Toggling counter rendered by a regular view, a memoized view without the counter,
// and a pure view with it.

use memogate::prelude::*;
use std::cell::Cell;

#[derive(Record)]
struct Heading {
    text: &'static str,
    counter: u32,
}

#[derive(Record)]
struct Label {
    text: &'static str,
}

fn heading(props: &Heading) -> String {
    format!("<h1>{}: {}</h1>", props.text, props.counter)
}

#[derive(Default)]
struct PureHeading {
    renders: Cell<u32>,
}

impl PureView for PureHeading {
    type Props = Heading;
    type Output = String;

    fn render(&self, props: &Heading) -> String {
        self.renders.set(self.renders.get() + 1);
        heading(props)
    }
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::level_filters::LevelFilter::TRACE)
            .finish(),
    )
    .unwrap();

    let memo_renders = Cell::new(0);
    let mut memoized = memo(|props: &Label| {
        memo_renders.set(memo_renders.get() + 1);
        format!("<h1>{}</h1>", props.text)
    });

    let mut pure = PureNode::new(
        PureHeading::default(),
        Heading {
            text: "This is a custom pure view, counter",
            counter: 0,
        },
    );

    for counter in 0..3 {
        println!(
            "{}",
            heading(&Heading {
                text: "This is a regular view, counter",
                counter,
            })
        );
        println!(
            "{}",
            memoized.invoke(Label {
                text: "This is a memoized view",
            })
        );

        pure.update(Heading {
            text: "This is a custom pure view, counter",
            counter,
        });
        println!("{}", pure.output());
    }

    println!(
        "memoized renders: {}, pure renders: {}",
        memo_renders.get(),
        pure.view().renders.get()
    );
}
