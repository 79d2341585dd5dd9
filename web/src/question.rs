use trivia_core as trivia;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct QuestionProps {
    pub card: trivia::QuestionCard,
    pub on_reveal: Callback<()>,
    pub on_back: Callback<()>,
}

#[function_component(QuestionView)]
pub(crate) fn question_view(props: &QuestionProps) -> Html {
    use trivia::AnswerReveal::*;

    let card = &props.card;
    let on_reveal = props.on_reveal.reform(|_: MouseEvent| ());
    let on_back = props.on_back.reform(|_: MouseEvent| ());

    let image = card.image.as_ref().map(|src| {
        html! { <img class="question-image" src={src.clone()} alt={card.text.clone()}/> }
    });

    let answer = match card.reveal {
        Unavailable => html! {},
        Hidden => html! {
            <button class="reveal-btn" onclick={on_reveal}>{"Reveal answer"}</button>
        },
        Shown => html! {
            <p class="answer-text">{card.answer.clone()}</p>
        },
    };

    html! {
        <section id="question-view" class="active" data-tile-id={card.tile.to_string()}>
            <header class="question-header">
                <span class="category-name">{card.category.clone()}</span>
                <span class="point-value">{card.points}</span>
            </header>
            <p id="question-text">{card.text.clone()}</p>
            {image}
            <div class="answer">{answer}</div>
            <button id="back-btn" onclick={on_back}>{"Back to board"}</button>
        </section>
    }
}
