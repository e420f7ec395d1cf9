use keydispatch::errors::*;
use keydispatch::{ vkey, Dispatcher, Keyboard };

use log::{ error, info };

use std::cell::RefCell;
use std::rc::Rc;

use winit::{
    event::*,
    event_loop::{ EventLoop, ControlFlow },
    window::WindowBuilder,
};


/**
 * Stand-in for a game entity driven by held keys.
 */
#[derive(Debug, Default)]
struct Player {
    position: (i32, i32),
    shots: u64,
    quit: bool,
}

impl Player {
    fn move_left(&mut self) {
        self.position.0 -= 1;
    }

    fn move_right(&mut self) {
        self.position.0 += 1;
    }

    fn move_up(&mut self) {
        self.position.1 += 1;
    }

    fn move_down(&mut self) {
        self.position.1 -= 1;
    }

    fn fire(&mut self) {
        self.shots += 1;
    }

    fn quit(&mut self) {
        self.quit = true;
    }
}


fn bind_controls(dispatcher: &Dispatcher<Player>, player: &Rc<RefCell<Player>>) {
    for &key in &[vkey::A, vkey::LEFT] {
        dispatcher.register(key, player, Player::move_left);
    }
    for &key in &[vkey::D, vkey::RIGHT] {
        dispatcher.register(key, player, Player::move_right);
    }
    for &key in &[vkey::W, vkey::UP] {
        dispatcher.register(key, player, Player::move_up);
    }
    for &key in &[vkey::S, vkey::DOWN] {
        dispatcher.register(key, player, Player::move_down);
    }
    dispatcher.register(vkey::SPACE, player, Player::fire);
    dispatcher.register(vkey::ESCAPE, player, Player::quit);
}


fn run() -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new().with_title("Key dispatch demo").build(&event_loop)?;

    let player = Rc::new(RefCell::new(Player::default()));
    let dispatcher = Dispatcher::new();
    bind_controls(&dispatcher, &player);
    let names: Vec<_> = dispatcher.bound_keys().into_iter()
        .filter_map(vkey::to_virtual_keycode)
        .collect();
    info!("bound keys: {:?}", names);

    let mut keyboard = Keyboard::new();
    let mut frame: u64 = 0;

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { ref event, window_id }
            if window_id == window.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        *control_flow = ControlFlow::Exit
                    },
                    WindowEvent::KeyboardInput { input, .. } => {
                        keyboard.process_input(input);
                    },
                    WindowEvent::Focused(false) => {
                        keyboard.release_all();
                    },
                    _ => ()
                }
            },
            Event::MainEventsCleared => {
                dispatcher.poll(&keyboard);
                frame += 1;

                let player = player.borrow();
                if player.quit {
                    info!("leaving after {} frames: {:?}", frame, *player);
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                if frame % 600 == 0 {
                    info!("frame {}: position {:?}, {} shots", frame, player.position, player.shots);
                }
            }
            _ => ()
        }
    })
}


fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    if let Err(e) = run() {
        error!("{}", e);
        for cause in e.iter().skip(1) {
            error!("caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
