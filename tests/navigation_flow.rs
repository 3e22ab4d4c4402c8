use dev_quiz::scoring::{self, Grade};
use dev_quiz::{
    parse_catalog, Advance, AnswerPolicy, App, AppOptions, Catalog, CategoryId, NavEvent,
    NavigationState, Navigator, NotFound, QuizSession,
};

const CATALOG: &str = r#"{
  "categories": [
    {
      "id": "frontend",
      "name": "Front-end",
      "description": "Browsers",
      "icon": "Code2",
      "quizzes": [
        {
          "id": "geo",
          "title": "Geography & Arithmetic",
          "description": "Two quick ones",
          "category": "frontend",
          "difficulty": "beginner",
          "estimatedTime": 1,
          "questions": [
            { "id": 1, "question": "Capital of France?", "options": ["Paris", "Lyon", "Nice"], "correctAnswer": "Paris" },
            { "id": 2, "question": "2 + 2?", "options": ["3", "4", "5"], "correctAnswer": "4" }
          ]
        }
      ]
    },
    {
      "id": "algorithms",
      "name": "Algorithms",
      "description": "Five in a row",
      "icon": "Brain",
      "quizzes": [
        {
          "id": "five",
          "title": "Five Questions",
          "description": "",
          "category": "algorithms",
          "difficulty": "advanced",
          "estimatedTime": 3,
          "questions": [
            { "id": 1, "question": "a?", "options": ["yes", "no"], "correctAnswer": "yes" },
            { "id": 2, "question": "b?", "options": ["yes", "no"], "correctAnswer": "no" },
            { "id": 3, "question": "c?", "options": ["yes", "no"], "correctAnswer": "yes" },
            { "id": 4, "question": "d?", "options": ["yes", "no"], "correctAnswer": "no" },
            { "id": 5, "question": "e?", "options": ["yes", "no"], "correctAnswer": "yes", "explanation": "Because." }
          ]
        }
      ]
    }
  ]
}"#;

fn catalog() -> Catalog {
    parse_catalog(CATALOG).expect("test catalog is valid")
}

#[test]
fn one_of_two_correct_needs_review() {
    let catalog = catalog();
    let quiz = catalog.find_quiz(CategoryId::Frontend, "geo").unwrap();
    let mut session = QuizSession::new(quiz, AnswerPolicy::Required);

    session.select_answer(quiz, 1, "Paris").unwrap();
    assert_eq!(session.advance(quiz), Advance::Moved(1));
    session.select_answer(quiz, 2, "3").unwrap();
    assert_eq!(session.advance(quiz), Advance::Finished);

    let score = scoring::score(quiz, session.answers());
    let percentage = scoring::percentage(score, quiz.question_count());
    assert_eq!(score, 1);
    assert_eq!(percentage, 50);
    assert_eq!(Grade::from_percentage(percentage), Grade::NeedsReview);
}

#[test]
fn five_of_five_is_excellent() {
    let catalog = catalog();
    let quiz = catalog.find_quiz(CategoryId::Algorithms, "five").unwrap();
    let mut session = QuizSession::new(quiz, AnswerPolicy::Required);

    loop {
        let question = session.current_question(quiz).unwrap();
        let (id, correct) = (question.id, question.correct_answer.clone());
        session.select_answer(quiz, id, &correct).unwrap();
        if session.advance(quiz) == Advance::Finished {
            break;
        }
    }

    let score = scoring::score(quiz, session.answers());
    let percentage = scoring::percentage(score, quiz.question_count());
    assert_eq!((score, percentage), (5, 100));
    assert_eq!(Grade::from_percentage(percentage), Grade::Excellent);
}

#[test]
fn unknown_category_is_not_found() {
    let mut app = App::new(catalog(), AppOptions::default());

    assert_eq!(
        app.select_category("nonexistent"),
        Err(NotFound::Category("nonexistent".to_string()))
    );
    assert!(matches!(app.state(), NavigationState::Home));

    // Valid tag, but this catalog has no security category.
    assert!(app.select_category("security").is_err());
    assert!(matches!(app.state(), NavigationState::Home));

    app.select_category("frontend").unwrap();
    assert!(app.select_quiz("missing").is_err());
    assert!(matches!(
        app.state(),
        NavigationState::CategoryView {
            category: CategoryId::Frontend
        }
    ));
}

#[test]
fn frontend_first_quiz_walkthrough() {
    let catalog = catalog();
    let mut nav = Navigator::new(AnswerPolicy::Required);

    assert!(nav.dispatch(NavEvent::SelectCategory(CategoryId::Frontend)));
    let NavigationState::CategoryView { category } = nav.state() else {
        panic!("expected category view");
    };
    let first_quiz = catalog.find_category(*category).unwrap().quizzes[0].clone();
    assert!(nav.dispatch(NavEvent::SelectQuiz(first_quiz)));

    let NavigationState::QuizInProgress { quiz, session } = nav.state_mut() else {
        panic!("expected quiz in progress");
    };
    assert_eq!(session.current_index(), 0);
    assert!(session.answers().is_empty());

    session.select_answer(quiz, 1, "Paris").unwrap();
    assert!(!session.retreat());
    assert_eq!(session.current_index(), 0);

    assert_eq!(session.advance(quiz), Advance::Moved(1));
    assert_eq!(session.answer_for(1), Some("Paris"));

    // Back and forth keeps what was recorded.
    assert!(session.retreat());
    assert_eq!(session.advance(quiz), Advance::Moved(1));
    assert_eq!(session.answer_for(1), Some("Paris"));
    assert_eq!(session.answered_count(), 1);
}

#[test]
fn skipping_scores_missing_answers_as_incorrect() {
    let options = AppOptions {
        answer_policy: AnswerPolicy::Optional,
        ..AppOptions::default()
    };
    let mut app = App::new(catalog(), options);
    app.select_category("algorithms").unwrap();
    app.select_quiz("five").unwrap();

    app.choose_option(0);
    for _ in 0..5 {
        app.next();
    }

    let NavigationState::QuizResults {
        score,
        total,
        answers,
        ..
    } = app.state()
    else {
        panic!("expected results, got {}", app.state().name());
    };
    assert_eq!((*score, *total), (1, 5));
    assert_eq!(answers.len(), 1);
}
