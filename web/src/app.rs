use crate::board::BoardView;
use crate::question::QuestionView;
use crate::repository;
use crate::utils::*;
use clap::Args;
use trivia_core as trivia;
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct AppProps {
    /// Where to load the question bank from
    #[arg(long, default_value = repository::DEFAULT_DATASET_URL)]
    pub questions: String,
}

#[derive(Clone, Debug)]
pub(crate) enum Msg {
    Loaded(trivia::Dataset),
    SelectTile(trivia::TileId),
    RevealAnswer,
    ShowBoard,
    ResetAll,
}

/// Owns the game session; nothing is clickable until the question bank has loaded.
#[derive(Debug)]
pub(crate) struct App {
    session: Option<trivia::GameSession<LocalStore>>,
}

impl App {
    fn view_board(&self, ctx: &Context<Self>, session: &trivia::GameSession<LocalStore>) -> Html {
        let on_select = ctx.link().callback(Msg::SelectTile);
        let on_reset = ctx.link().callback(|_: MouseEvent| Msg::ResetAll);

        html! {
            <section id="board-view" class="active">
                <BoardView
                    headers={session.category_headers()}
                    tiles={session.board_tiles()}
                    {on_select}
                />
                <footer>
                    <button id="reset-btn" onclick={on_reset}>{"Reset game"}</button>
                </footer>
            </section>
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let url = ctx.props().questions.clone();
        ctx.link()
            .send_future(async move { Msg::Loaded(repository::load(&url).await) });

        Self { session: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Loaded(dataset) => {
                log::debug!("question bank ready");
                self.session = Some(trivia::GameSession::start(dataset, LocalStore));
                true
            }
            msg => {
                let Some(session) = self.session.as_mut() else {
                    log::warn!("ignoring {:?} before the question bank loaded", msg);
                    return false;
                };
                match msg {
                    SelectTile(tile) => {
                        log::debug!("select tile: {}", tile);
                        session.select_tile(tile)
                    }
                    RevealAnswer => session.reveal_answer(),
                    ShowBoard => session.show_board(),
                    ResetAll => session.reset_all(&BrowserConfirm),
                    Loaded(_) => false,
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let content = match &self.session {
            None => html! { <p class="loading">{"Loading questions…"}</p> },
            Some(session) => match session.view() {
                trivia::ActiveView::Board => self.view_board(ctx, session),
                trivia::ActiveView::Question(card) => html! {
                    <QuestionView
                        card={card.clone()}
                        on_reveal={ctx.link().callback(|_: ()| Msg::RevealAnswer)}
                        on_back={ctx.link().callback(|_: ()| Msg::ShowBoard)}
                    />
                },
            },
        };

        html! {
            <div class="trivia">
                {content}
            </div>
        }
    }
}
