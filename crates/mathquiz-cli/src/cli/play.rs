mod prompt;

use crate::cli::client::{ApiClient, QuizParams};
use crate::opt::Play;
use anyhow::{Context, Result, bail};
use mathquiz_core::quiz::session::{Progress, QuizSession, SessionSummary};
use mathquiz_model::analysis::{Analysis, AnalyzeRequest, MissedQuestion};
use mathquiz_model::question::QuizQuestion;
use mathquiz_model::quiz::SubmitAnswerRequest;
use prompt::QuizPrompt;
use reedline::{Reedline, Signal};
use std::error::Error;
use std::time::Duration;

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Answer(String),
    Invalid,
}

/// Accepts an option number, the option text itself, or `/quit`.
fn parse_input(line: &str, options: &[String]) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Invalid;
    }
    if matches!(line, "/quit" | "/q" | "/exit") {
        return Input::Quit;
    }
    if let Ok(number) = line.parse::<usize>() {
        if let Some(option) = number.checked_sub(1).and_then(|index| options.get(index)) {
            return Input::Answer(option.clone());
        }
    }
    match options.iter().find(|option| option.trim().eq_ignore_ascii_case(line)) {
        Some(option) => Input::Answer(option.clone()),
        None => Input::Invalid,
    }
}

fn render_question(question: &QuizQuestion, position: usize, total: usize) -> String {
    let mut out = format!("\nQuestion {} of {total}: {}\n", position + 1, question.question.question);
    for (index, option) in question.options.iter().enumerate() {
        out.push_str(&format!("  {}) {option}\n", index + 1));
    }
    out
}

fn render_summary(summary: &SessionSummary) -> String {
    let mut out = format!("\nYou scored {} out of {}.\n", summary.score, summary.total);
    if !summary.weak_areas.is_empty() {
        out.push_str(&format!("Areas to review: {}\n", summary.weak_areas.join(", ")));
    }
    out
}

fn render_analysis(analysis: &Analysis) -> String {
    if analysis.recommended_topics.is_empty() {
        return String::new();
    }
    format!("Recommended practice: {}\n", analysis.recommended_topics.join(", "))
}

fn missed_questions(session: &QuizSession) -> Vec<MissedQuestion> {
    session
        .missed()
        .iter()
        .map(|missed| MissedQuestion {
            id: Some(missed.question.id),
            topic: missed.question.topic.clone(),
            pattern: missed.question.pattern.clone(),
        })
        .collect()
}

/// Reads one line, `None` on ctrl-c / ctrl-d.
fn read_line(editor: &mut Reedline, prompt: &QuizPrompt) -> Result<Option<String>> {
    match editor.read_line(prompt)? {
        Signal::Success(line) => Ok(Some(line)),
        Signal::CtrlC | Signal::CtrlD => Ok(None),
    }
}

async fn choose_topic(client: &ApiClient, editor: &mut Reedline) -> Result<Option<String>> {
    match client.topics().await {
        Ok(topics) if !topics.is_empty() => println!("Known topics: {}", topics.join(", ")),
        Ok(_) => {}
        Err(error) => tracing::warn!(error = &error as &dyn Error, "could not list topics"),
    }
    let prompt = QuizPrompt::new("topic");
    loop {
        let Some(line) = read_line(editor, &prompt)? else {
            return Ok(None);
        };
        let topic = line.trim();
        if !topic.is_empty() {
            return Ok(Some(topic.to_owned()));
        }
    }
}

pub(crate) async fn play(opt: Play) -> Result<()> {
    if opt.server.debug {
        mathquiz_utils::tracing::setup(
            mathquiz_utils::tracing::TracingConfig::builder()
                .package(env!("CARGO_PKG_NAME"))
                .version(env!("CARGO_PKG_VERSION"))
                .build(),
        )?;
    }

    let client = ApiClient::new(opt.server.server)?;
    let mut editor = Reedline::create();

    let topic = match opt.topic {
        Some(topic) if !topic.trim().is_empty() => topic,
        _ => match choose_topic(&client, &mut editor).await? {
            Some(topic) => topic,
            None => return Ok(()),
        },
    };

    let params = QuizParams {
        topic: &topic,
        num_questions: opt.count,
        difficulty: opt.difficulty.as_deref(),
        mode: opt.mode.as_deref(),
    };
    let questions = client.generate_quiz(&params).await.context("could not load a quiz")?;

    let mut session = QuizSession::new();
    if session.start(questions).is_err() {
        bail!("no questions available for {topic}");
    }

    let delay = Duration::from_millis(opt.delay_ms);
    let mut prompt = QuizPrompt::default();

    let summary = loop {
        let Some(current) = session.current().cloned() else {
            bail!("quiz ended unexpectedly");
        };
        print!("{}", render_question(&current, session.position(), session.len()));
        prompt.set_label(format!("{}/{}", session.position() + 1, session.len()));

        let choice = loop {
            let Some(line) = read_line(&mut editor, &prompt)? else {
                return Ok(());
            };
            match parse_input(&line, &current.options) {
                Input::Answer(choice) => break choice,
                Input::Quit => return Ok(()),
                Input::Invalid => println!("Enter a number between 1 and {}", current.options.len()),
            }
        };

        let outcome = session.answer(&choice)?;
        if outcome.correct {
            println!("Correct!");
        } else {
            let answer = outcome.correct_answer.as_deref().unwrap_or("unknown");
            println!("Not quite. The answer is {answer}.");
        }

        let request = SubmitAnswerRequest {
            question_id: current.question.id,
            user_answer: Some(choice),
            is_correct: Some(outcome.correct),
        };
        match client.submit_answer(&request).await {
            Ok(response) => {
                if let Some(similar) = response.similar_question {
                    println!("A similar question was added to help you practice.");
                    session.insert_follow_up(similar)?;
                }
            }
            Err(error) => tracing::warn!(error = &error as &dyn Error, "could not submit answer"),
        }

        tokio::time::sleep(delay).await;

        if let Progress::Completed(summary) = session.advance()? {
            break summary;
        }
    };

    print!("{}", render_summary(&summary));

    let missed = missed_questions(&session);
    if !missed.is_empty() {
        let request = AnalyzeRequest { wrong_questions: missed };
        match client.analyze(&request).await {
            Ok(analysis) => print!("{}", render_analysis(&analysis)),
            Err(error) => tracing::warn!(error = &error as &dyn Error, "could not analyze results"),
        }
    }
    Ok(())
}
