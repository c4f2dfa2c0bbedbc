use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{Command, Effect, IndexPicker, NowStatus, Session, ViewState};
use crate::audio::AudioOutput;
use crate::config;
use crate::library::LibrarySource;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Collaborators every command may need.
pub struct Context<'a> {
    pub settings: &'a config::Settings,
    pub library: &'a dyn LibrarySource,
    pub output: &'a mut dyn AudioOutput,
    pub picker: &'a mut dyn IndexPicker,
}

/// Main terminal event loop: handles input, UI drawing and track-end
/// advancing. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    session: &mut Session,
    view: &mut ViewState,
    ctx: &mut Context<'_>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if ctx.settings.playback.advance_on_finish && !session.is_idle() && ctx.output.is_finished()
        {
            let effect = session.on_track_finished(&mut *ctx.picker);
            if effect == Effect::None {
                ctx.output.stop();
            } else {
                apply_effect(effect, session, view, ctx);
            }
        }

        let paused = ctx.output.is_paused();
        terminal.draw(|f| ui::draw(f, session, view, &ctx.settings.ui, paused))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, session, view, ctx, state) {
                    break;
                }
            }
        }
    }

    ctx.output.stop();
    Ok(())
}

/// Run one session command and carry its effect over to the audio output.
pub fn dispatch(command: Command, session: &mut Session, view: &mut ViewState, ctx: &mut Context<'_>) {
    let effect = session.handle(command, ctx.library, &mut *ctx.picker);
    view.clamp(session.view().len());
    apply_effect(effect, session, view, ctx);
}

fn apply_effect(effect: Effect, session: &Session, view: &mut ViewState, ctx: &mut Context<'_>) {
    match effect {
        Effect::None => {}
        Effect::NowChanged => {
            load_now(session, &mut *ctx.output, view, ctx.settings.playback.autoplay)
        }
        Effect::TogglePause => {
            if matches!(session.now_status(), NowStatus::Ready(_)) {
                ctx.output.toggle_pause();
            }
        }
    }
}

/// Load `now` into the output. A track whose file is gone is never handed
/// to the output; the view reports it instead.
pub fn load_now(session: &Session, output: &mut dyn AudioOutput, view: &mut ViewState, autoplay: bool) {
    match session.now_status() {
        NowStatus::Idle => {
            output.stop();
            view.message = None;
        }
        NowStatus::Missing(track) => {
            output.stop();
            tracing::warn!(path = %track.path.display(), "selected file is missing on disk");
            view.message = Some(format!("file missing on disk: {}", track.path.display()));
        }
        NowStatus::Ready(track) => match output.play(&track.path, !autoplay) {
            Ok(()) => view.message = None,
            Err(err) => {
                tracing::warn!("playback failed: {err}");
                view.message = Some(err.to_string());
            }
        },
    }
}

/// Returns `true` when the user asked to quit.
pub fn handle_key_event(
    key: KeyEvent,
    session: &mut Session,
    view: &mut ViewState,
    ctx: &mut Context<'_>,
    state: &mut EventLoopState,
) -> bool {
    if view.search_mode {
        state.pending_gg = false;
        handle_search_key(key, session, view, ctx);
        return false;
    }

    let len = session.view().len();
    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('/') => {
            view.search_mode = true;
            view.input = session.query().to_string();
        }
        KeyCode::Char('j') | KeyCode::Down => view.down(len),
        KeyCode::Char('k') | KeyCode::Up => view.up(),
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                view.top();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => view.bottom(len),
        KeyCode::Enter => dispatch(Command::Select(view.cursor), session, view, ctx),
        KeyCode::Char('a') => dispatch(Command::Enqueue(view.cursor), session, view, ctx),
        KeyCode::Char('c') => dispatch(Command::ClearQueue, session, view, ctx),
        KeyCode::Char('h') | KeyCode::Left => dispatch(Command::Prev, session, view, ctx),
        KeyCode::Char('l') | KeyCode::Right => dispatch(Command::Next, session, view, ctx),
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            dispatch(Command::PlayPause, session, view, ctx)
        }
        KeyCode::Char('s') => {
            let on = !session.shuffle();
            dispatch(Command::SetShuffle(on), session, view, ctx)
        }
        KeyCode::Char('r') => {
            let mode = session.loop_mode().cycle();
            dispatch(Command::SetLoop(mode), session, view, ctx)
        }
        KeyCode::Char('R') => dispatch(Command::Rescan, session, view, ctx),
        _ => {}
    }

    false
}

fn handle_search_key(key: KeyEvent, session: &mut Session, view: &mut ViewState, ctx: &mut Context<'_>) {
    match key.code {
        KeyCode::Esc => {
            view.search_mode = false;
            view.input.clear();
            dispatch(Command::Search(String::new()), session, view, ctx);
        }
        KeyCode::Enter => {
            view.search_mode = false;
            view.top();
        }
        KeyCode::Backspace => {
            view.input.pop();
            dispatch(Command::Search(view.input.clone()), session, view, ctx);
        }
        KeyCode::Char(c) if !c.is_control() => {
            view.input.push(c);
            dispatch(Command::Search(view.input.clone()), session, view, ctx);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;
    use crate::app::LoopMode;
    use crate::audio::testing::RecordingOutput;
    use crate::library::Track;

    struct NoRescan;

    impl LibrarySource for NoRescan {
        fn rescan(&self) -> Vec<Track> {
            Vec::new()
        }
    }

    struct First;

    impl IndexPicker for First {
        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn track(dir: &Path, title: &str, artist: &str, create: bool) -> Track {
        let path = dir.join(format!("{title}.mp3"));
        if create {
            fs::write(&path, b"x").unwrap();
        }
        Track {
            title: title.into(),
            artist: artist.into(),
            album: "Unknown".into(),
            duration: 0.0,
            path,
        }
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn press(
        k: KeyEvent,
        session: &mut Session,
        view: &mut ViewState,
        output: &mut RecordingOutput,
        state: &mut EventLoopState,
    ) -> bool {
        let settings = config::Settings::default();
        let mut picker = First;
        let mut ctx = Context {
            settings: &settings,
            library: &NoRescan,
            output,
            picker: &mut picker,
        };
        handle_key_event(k, session, view, &mut ctx, state)
    }

    #[test]
    fn enter_plays_the_highlighted_track() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            track(dir.path(), "Lotus", "X", true),
            track(dir.path(), "Fog", "Y", true),
        ];
        let mut session = Session::new(rows.clone());
        let mut view = ViewState::default();
        let mut output = RecordingOutput::default();
        let mut state = EventLoopState::default();

        press(key('j'), &mut session, &mut view, &mut output, &mut state);
        press(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            &mut session,
            &mut view,
            &mut output,
            &mut state,
        );

        assert_eq!(session.now(), Some(&rows[1]));
        assert_eq!(output.played, vec![rows[1].path.clone()]);
        assert!(!output.paused);
    }

    #[test]
    fn missing_file_never_reaches_the_output() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            track(dir.path(), "Here", "X", true),
            track(dir.path(), "Gone", "Y", false),
        ];
        let mut session = Session::new(rows);
        let mut view = ViewState::default();
        let mut output = RecordingOutput::default();
        let mut state = EventLoopState::default();

        press(key('l'), &mut session, &mut view, &mut output, &mut state);

        assert_eq!(session.now().map(|t| t.title.as_str()), Some("Gone"));
        assert!(output.played.is_empty());
        assert_eq!(output.stops, 1);
        assert!(view.message.as_deref().unwrap().contains("missing"));

        // Play/pause on a missing file does nothing either.
        press(key(' '), &mut session, &mut view, &mut output, &mut state);
        assert!(!output.paused);
    }

    #[test]
    fn space_toggles_the_output_but_not_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(vec![track(dir.path(), "Lotus", "X", true)]);
        let mut view = ViewState::default();
        let mut output = RecordingOutput::default();
        let mut state = EventLoopState::default();

        let before = format!("{session:?}");
        press(key(' '), &mut session, &mut view, &mut output, &mut state);
        assert!(output.paused);
        press(key('p'), &mut session, &mut view, &mut output, &mut state);
        assert!(!output.paused);
        assert_eq!(format!("{session:?}"), before);
    }

    #[test]
    fn search_mode_filters_and_escape_restores() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(vec![
            track(dir.path(), "Lotus", "X", true),
            track(dir.path(), "Fog", "Lotus", true),
            track(dir.path(), "Rain", "Z", true),
        ]);
        let mut view = ViewState::default();
        let mut output = RecordingOutput::default();
        let mut state = EventLoopState::default();

        press(key('/'), &mut session, &mut view, &mut output, &mut state);
        assert!(view.search_mode);
        for c in "LOTUS".chars() {
            press(key(c), &mut session, &mut view, &mut output, &mut state);
        }
        assert_eq!(session.query(), "LOTUS");
        assert_eq!(session.view().len(), 2);
        // Typing in search mode does not trigger commands bound to letters.
        assert!(output.played.is_empty());

        press(
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            &mut session,
            &mut view,
            &mut output,
            &mut state,
        );
        assert_eq!(session.query(), "LOTU");

        press(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            &mut session,
            &mut view,
            &mut output,
            &mut state,
        );
        assert!(!view.search_mode);
        assert_eq!(session.view().len(), 3);
    }

    #[test]
    fn queue_shuffle_and_loop_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(vec![
            track(dir.path(), "Lotus", "X", true),
            track(dir.path(), "Fog", "Y", true),
        ]);
        let mut view = ViewState::default();
        let mut output = RecordingOutput::default();
        let mut state = EventLoopState::default();

        press(key('a'), &mut session, &mut view, &mut output, &mut state);
        press(key('a'), &mut session, &mut view, &mut output, &mut state);
        assert_eq!(session.queue().len(), 2);
        press(key('c'), &mut session, &mut view, &mut output, &mut state);
        assert!(session.queue().is_empty());

        press(key('s'), &mut session, &mut view, &mut output, &mut state);
        assert!(session.shuffle());
        press(key('r'), &mut session, &mut view, &mut output, &mut state);
        assert_eq!(session.loop_mode(), LoopMode::All);
    }

    #[test]
    fn gg_and_g_jump_to_the_ends() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(vec![
            track(dir.path(), "A", "X", false),
            track(dir.path(), "B", "X", false),
            track(dir.path(), "C", "X", false),
        ]);
        let mut view = ViewState::default();
        let mut output = RecordingOutput::default();
        let mut state = EventLoopState::default();

        press(key('G'), &mut session, &mut view, &mut output, &mut state);
        assert_eq!(view.cursor, 2);
        press(key('g'), &mut session, &mut view, &mut output, &mut state);
        assert_eq!(view.cursor, 2);
        press(key('g'), &mut session, &mut view, &mut output, &mut state);
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn q_quits() {
        let mut session = Session::new(Vec::new());
        let mut view = ViewState::default();
        let mut output = RecordingOutput::default();
        let mut state = EventLoopState::default();
        assert!(press(key('q'), &mut session, &mut view, &mut output, &mut state));
        assert!(!press(key('x'), &mut session, &mut view, &mut output, &mut state));
    }

    #[test]
    fn load_now_reports_idle_and_ready() {
        let dir = tempfile::tempdir().unwrap();
        let mut output = RecordingOutput::default();
        let mut view = ViewState {
            message: Some("stale".into()),
            ..ViewState::default()
        };

        load_now(&Session::new(Vec::new()), &mut output, &mut view, true);
        assert!(view.message.is_none());
        assert_eq!(output.stops, 1);

        let session = Session::new(vec![track(dir.path(), "Lotus", "X", true)]);
        load_now(&session, &mut output, &mut view, true);
        assert_eq!(output.played, vec![dir.path().join("Lotus.mp3")]);
        assert!(!output.paused);
    }
}
