use trivia_core as trivia;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    tile: trivia::TileView,
    callback: Callback<trivia::TileId>,
}

#[function_component(Tile)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps { tile, callback } = props.clone();
    let trivia::TileView { id, points, used } = tile;

    let class = classes!("tile", used.then_some("used"));
    // used tiles stay on the board but take no clicks
    let onclick = (!used).then(|| {
        Callback::from(move |_: MouseEvent| {
            log::trace!("tile {} clicked", id);
            callback.emit(id);
        })
    });

    html! {
        <td {class} {onclick} data-tile-id={id.to_string()}>
            <span class="point-value">{points}</span>
        </td>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub headers: Vec<String>,
    pub tiles: Vec<trivia::TileView>,
    pub on_select: Callback<trivia::TileId>,
}

#[function_component(BoardView)]
pub(crate) fn board_view(props: &BoardProps) -> Html {
    let columns = usize::from(trivia::COLUMNS);

    html! {
        <table class="board">
            <thead>
                <tr>
                    { for props.headers.iter().map(|name| html! { <th>{name.clone()}</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    for props.tiles.chunks(columns).map(|row| html! {
                        <tr>
                            {
                                for row.iter().map(|tile| html! {
                                    <Tile
                                        key={tile.id.to_string()}
                                        tile={tile.clone()}
                                        callback={props.on_select.clone()}
                                    />
                                })
                            }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}
