use anyhow::{bail, Context};
use snapsheet::prelude::*;

const FRAME_MS: u64 = 16;

/// Host that prints what a renderer would draw.
#[derive(Debug, Default)]
struct ConsoleHost {
    frames: usize,
}

impl SheetHost for ConsoleHost {
    fn attach(&mut self, fill: &BackdropFill) {
        log::info!("attach, backdrop {fill:?}");
    }

    fn set_sheet_height(&mut self, height: f32) {
        log::trace!("sheet height {height:.1}");
    }

    fn set_backdrop_height(&mut self, height: f32) {
        log::trace!("backdrop height {height:.1}");
    }

    fn request_frame(&mut self) {
        self.frames += 1;
    }

    fn detach(&mut self) {
        log::info!("detach");
    }
}

struct Session {
    sheet: BottomSheet<ConsoleHost>,
    now_ms: u64,
}

impl Session {
    fn pointer(&mut self, event: PointerEvent) -> bool {
        self.now_ms = event.uptime_ms;
        self.sheet.handle_pointer(&event)
    }

    fn settle(&mut self) {
        while self.sheet.tick(self.now_ms) {
            self.now_ms += FRAME_MS;
        }
        println!(
            "  settled: snap {} of {:?}, height {:?}",
            self.sheet.current_snap(),
            self.sheet.snap_points(),
            self.sheet.sheet_height()
        );
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== snapsheet scripted session ===");

    let callbacks = SheetCallbacks::new()
        .on_snap(|index| println!("  on_snap({index})"))
        .on_open(|| println!("  on_open"))
        .on_close(|| println!("  on_close"));
    let config = SheetConfig::new()
        .with_snap_points([100.0, 300.0, 600.0])
        .with_background_color("#1e1e1e")
        .with_viewport(Viewport::new(834.0, 800.0));

    let sheet = BottomSheet::mount(config, callbacks, ConsoleHost::default(), 400.0, 0)
        .context("mounting the sheet")?;
    let mut session = Session { sheet, now_ms: 0 };

    println!("flick up from the peek position");
    session.pointer(PointerEvent::down(700.0, 1_000));
    session.pointer(PointerEvent::moved(650.0, 1_050));
    session.pointer(PointerEvent::moved(550.0, 1_100));
    session.pointer(PointerEvent::up(550.0, 1_100));
    session.settle();
    if session.sheet.current_snap() != 2 {
        bail!("flick should open the sheet");
    }

    println!("content grows while open");
    let now = session.now_ms;
    session.sheet.update_content_height(700.0, now);
    session.settle();

    println!("slow drag down to the middle");
    let start = session.now_ms + 500;
    session.pointer(PointerEvent::down(200.0, start));
    session.pointer(PointerEvent::moved(350.0, start + 1_000));
    session.pointer(PointerEvent::moved(500.0, start + 2_000));
    session.pointer(PointerEvent::up(500.0, start + 2_000));
    session.settle();

    println!("pointer lost mid-drag");
    let start = session.now_ms + 500;
    session.pointer(PointerEvent::down(500.0, start));
    session.pointer(PointerEvent::moved(700.0, start + 1_000));
    session.sheet.cancel_drag(start + 1_000);
    session.now_ms = start + 1_000;
    session.settle();

    let host = session.sheet.destroy();
    println!("done, {} frames requested", host.frames);
    Ok(())
}
