use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use crate::adapters::{BrowserTimeProvider, DomPage, HttpActivityApi, init_console_logger};
use crate::board::{Action, Board};
use crate::config::BoardConfig;
use crate::error::{ApiError, DomError};
use crate::render;
use crate::types::form::RemovalTarget;

type WebBoard = Board<HttpActivityApi, DomPage, BrowserTimeProvider>;

#[derive(Debug, thiserror::Error)]
enum StartError {
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[wasm_bindgen(start)]
pub fn start() {
    init_console_logger();
    if let Err(err) = mount() {
        log::error!("failed to start activity board: {err}");
    }
}

fn mount() -> Result<(), StartError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let origin = window.location().origin().map_err(|_| DomError::NoOrigin)?;
    let config = BoardConfig {
        base_url: origin,
        ..BoardConfig::default()
    };

    let page = DomPage::from_document(&document)?;
    let form = page.form_element().clone();
    let list = page.activities_list().clone();
    let board = Rc::new(Board::new(
        HttpActivityApi::new(&config)?,
        page,
        BrowserTimeProvider,
        &config,
    ));

    let on_submit = {
        let board = Rc::clone(&board);
        Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            dispatch(&board, Action::SubmitSignup);
        }) as Box<dyn FnMut(Event)>)
    };
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|_| DomError::Listener("submit"))?;
    on_submit.forget();

    // One delegated listener survives every re-render of the list.
    let on_click = {
        let board = Rc::clone(&board);
        Closure::wrap(Box::new(move |event: Event| {
            if let Some(target) = removal_target(&event) {
                dispatch(&board, Action::RemoveParticipant(target));
            }
        }) as Box<dyn FnMut(Event)>)
    };
    list.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|_| DomError::Listener("click"))?;
    on_click.forget();

    dispatch(&board, Action::Load);
    Ok(())
}

fn dispatch(board: &Rc<WebBoard>, action: Action) {
    let board = Rc::clone(board);
    spawn_local(async move {
        board.handle(action).await;
    });
}

fn removal_target(event: &Event) -> Option<RemovalTarget> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    let button = element.closest(render::REMOVAL_CONTROL_SELECTOR).ok()??;
    render::removal_target_from_attributes(|name| button.get_attribute(name))
}
