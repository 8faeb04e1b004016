//! End-to-end extraction over saved share pages

use chatshare::extract::{locate, Fragment};
use chatshare::{extract, ExtractError, ExtractOptions, Extractor, Message, Provider, Speaker};

use crate::helpers::load_fixture;

fn roles(messages: &[Message]) -> Vec<Speaker> {
    messages.iter().map(|m| m.role).collect()
}

// ============================================================================
// Rendered Pages
// ============================================================================

#[test]
fn chatgpt_rendered_page_in_document_order() {
    let messages = extract(Provider::Chatgpt, &load_fixture("chatgpt.html")).unwrap();
    assert_eq!(
        messages,
        vec![
            Message::user("Why does the borrow checker reject this?"),
            Message::assistant(
                "Because `v` is borrowed mutably twice.\n\n- Split the borrow\n- Use indices"
            ),
            Message::user("Thanks & goodbye"),
            Message::assistant("You're welcome!"),
        ]
    );
}

#[test]
fn claude_excludes_attachments_tools_and_streaming_turns() {
    let messages = extract(Provider::Claude, &load_fixture("claude.html")).unwrap();
    assert_eq!(
        messages,
        vec![
            Message::user("Summarize the attached report"),
            Message::assistant("The report covers three quarters.\n\nRevenue grew in each one."),
            Message::user("Which quarter was best?"),
            Message::assistant("The third quarter."),
        ]
    );
}

#[test]
fn gemini_drops_short_model_responses() {
    let messages = extract(Provider::Gemini, &load_fixture("gemini.html")).unwrap();
    assert_eq!(
        messages,
        vec![
            Message::user("Plan a weekend in Lisbon"),
            Message::assistant("Day one: Alfama and the castle.\n\nDay two: Belém."),
            Message::user("Thanks"),
        ]
    );
}

#[test]
fn gemini_minimum_can_be_lowered() {
    let options = ExtractOptions {
        min_assistant_len: Some(2),
        ..ExtractOptions::default()
    };
    let messages = Extractor::new(Provider::Gemini)
        .with_options(options)
        .extract(&load_fixture("gemini.html"))
        .unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[3], Message::assistant("Enjoy!"));
}

#[test]
fn grok_takes_bubbles_without_action_buttons() {
    let messages = extract(Provider::Grok, &load_fixture("grok.html")).unwrap();
    assert_eq!(
        messages,
        vec![
            Message::user("What is a monad?"),
            Message::assistant("A monad is a way to chain computations."),
        ]
    );
}

#[test]
fn perplexity_strips_citations() {
    let messages = extract(Provider::Perplexity, &load_fixture("perplexity.html")).unwrap();
    assert_eq!(
        messages,
        vec![
            Message::user("What is the speed of light?"),
            Message::assistant("About 299,792 km/s."),
            Message::user("And the speed of sound?"),
            Message::assistant("About 343 m/s in dry air."),
        ]
    );
}

// ============================================================================
// Fallback Strategies
// ============================================================================

#[test]
fn chatgpt_payload_fallback_dedupes_repeated_payloads() {
    let doc = load_fixture("chatgpt_unrendered.html");

    // Both enqueued copies are located...
    let candidates = locate(Provider::Chatgpt, &doc).unwrap();
    assert_eq!(candidates.len(), 4);
    assert!(candidates
        .iter()
        .all(|c| matches!(c.fragment, Fragment::Text(_))));

    // ...and collapsed by the assembler
    let messages = extract(Provider::Chatgpt, &doc).unwrap();
    assert_eq!(
        messages,
        vec![
            Message::user("What is the capital of France?"),
            Message::assistant("The capital is Paris, France."),
        ]
    );
}

#[test]
fn grok_transcript_fallback_alternates_speakers() {
    let messages = extract(Provider::Grok, &load_fixture("grok_transcript.html")).unwrap();
    assert_eq!(
        roles(&messages),
        vec![Speaker::User, Speaker::Assistant, Speaker::User, Speaker::Assistant]
    );
    assert_eq!(messages[0].text, "What is 2+2?");
    assert_eq!(messages[3].text, "It is 6.");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn login_wall_is_no_turns_located_for_every_provider() {
    let doc = load_fixture("login_wall.html");
    for provider in Provider::ALL {
        let err = extract(provider, &doc).unwrap_err();
        assert_eq!(err, ExtractError::NoTurnsLocated { provider });
    }
}

#[test]
fn noise_only_page_is_all_turns_empty() {
    let doc = r#"<div data-message-author-role="assistant"><div class="markdown"><button>Copy</button></div></div>
<div data-message-author-role="user"><div class="whitespace-pre-wrap"> </div></div>"#;
    let err = extract(Provider::Chatgpt, doc).unwrap_err();
    assert_eq!(
        err,
        ExtractError::AllTurnsEmptyAfterCleaning {
            provider: Provider::Chatgpt,
            candidates: 2
        }
    );
}

#[test]
fn wrong_provider_finds_nothing() {
    let err = extract(Provider::Perplexity, &load_fixture("claude.html")).unwrap_err();
    assert_eq!(err.provider(), Provider::Perplexity);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn documents_parse_independently_across_threads() {
    let pages = [
        (Provider::Chatgpt, "chatgpt.html", 4),
        (Provider::Claude, "claude.html", 4),
        (Provider::Grok, "grok.html", 2),
        (Provider::Perplexity, "perplexity.html", 4),
    ];
    let handles: Vec<_> = pages
        .into_iter()
        .map(|(provider, name, expected)| {
            let doc = load_fixture(name);
            std::thread::spawn(move || (extract(provider, &doc).unwrap().len(), expected))
        })
        .collect();
    for handle in handles {
        let (found, expected) = handle.join().unwrap();
        assert_eq!(found, expected);
    }
}
