mod common;

use chrono::Utc;

use common::{
    InMemoryCourseRepository, InMemoryEnrollmentRepository, InMemoryQuestionRepository,
    InMemoryQuizAttemptRepository, InMemoryQuizRepository,
};
use educore_server::{
    errors::AppError,
    models::domain::{
        CatalogFilter, Course, CourseStatus, Enrollment, Question, QuestionOption, QuestionStatus, QuestionType, Quiz,
        QuizAttempt,
    },
    repositories::{
        CourseRepository, EnrollmentRepository, QuestionRepository, QuizAttemptRepository,
        QuizRepository,
    },
};

fn make_question(quiz_id: &str, text: &str, status: QuestionStatus) -> Question {
    let mut question = Question::new_draft(quiz_id, text, QuestionType::SingleChoice);
    question.options = vec![
        QuestionOption::new(&question.id, "yes", true),
        QuestionOption::new(&question.id, "no", false),
    ];
    question.status = status;
    question
}

fn make_attempt(id: &str, student_id: &str, quiz_id: &str, score: u32) -> QuizAttempt {
    QuizAttempt {
        id: id.to_string(),
        quiz_id: quiz_id.to_string(),
        student_id: student_id.to_string(),
        score,
        total_questions: 2,
        passed: score >= 1,
        answers: vec![],
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn question_repository_crud_and_error_paths() {
    let repo = InMemoryQuestionRepository::default();

    let active = make_question("quiz-1", "Active one", QuestionStatus::Active);
    let inactive = make_question("quiz-1", "Inactive one", QuestionStatus::Inactive);
    let other_quiz = make_question("quiz-2", "Elsewhere", QuestionStatus::Active);

    repo.create(active.clone()).await.expect("create active");
    let duplicate = repo.create(active.clone()).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let inserted = repo
        .create_many(vec![inactive.clone(), other_quiz.clone()])
        .await
        .expect("create_many should work");
    assert_eq!(inserted, 2);
    assert_eq!(repo.create_many(vec![]).await.expect("empty batch"), 0);

    let all = repo.find_by_quiz("quiz-1").await.expect("find_by_quiz");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, active.id);

    let live = repo.find_active_by_quiz("quiz-1").await.expect("find_active_by_quiz");
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].id, active.id);

    let mut edited = inactive.clone();
    edited.text = "Edited".to_string();
    let updated = repo.update(edited).await.expect("update should work");
    assert_eq!(updated.text, "Edited");

    let missing = repo
        .update(make_question("quiz-1", "Ghost", QuestionStatus::Active))
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    repo.delete(&active.id).await.expect("delete should work");
    assert!(repo.find_by_id(&active.id).await.expect("find").is_none());
    assert!(matches!(repo.delete(&active.id).await, Err(AppError::NotFound(_))));

    assert_eq!(repo.delete_by_quiz("quiz-1").await.expect("delete_by_quiz"), 1);
    assert_eq!(repo.find_by_quiz("quiz-2").await.expect("find").len(), 1);
}

#[tokio::test]
async fn quiz_repository_crud_and_error_paths() {
    let repo = InMemoryQuizRepository::default();

    let quiz1 = Quiz::new("Quiz One", "course-a", 10);
    let quiz2 = Quiz::new("Quiz Two", "course-a", 20);
    let quiz3 = Quiz::new("Quiz Three", "course-b", 5);

    for quiz in [&quiz1, &quiz2, &quiz3] {
        repo.create(quiz.clone()).await.expect("create quiz");
    }
    assert!(matches!(repo.create(quiz1.clone()).await, Err(AppError::Conflict(_))));

    let in_course = repo.find_by_course("course-a").await.expect("find_by_course");
    assert_eq!(in_course.len(), 2);

    let mut renamed = quiz1.clone();
    renamed.title = "Renamed".to_string();
    assert_eq!(repo.update(renamed).await.expect("update").title, "Renamed");

    let ghost = repo.update(Quiz::new("Ghost", "course-z", 1)).await;
    assert!(matches!(ghost, Err(AppError::NotFound(_))));

    repo.delete(&quiz2.id).await.expect("delete");
    assert!(repo.find_by_id(&quiz2.id).await.expect("find").is_none());
    assert!(matches!(repo.delete(&quiz2.id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn quiz_attempt_repository_is_append_only_and_newest_first() {
    let repo = InMemoryQuizAttemptRepository::default();

    repo.create(make_attempt("attempt-1", "user-a", "quiz-1", 0)).await.expect("create 1");
    repo.create(make_attempt("attempt-2", "user-a", "quiz-1", 2)).await.expect("create 2");
    repo.create(make_attempt("attempt-3", "user-a", "quiz-2", 1)).await.expect("create 3");
    repo.create(make_attempt("attempt-4", "user-b", "quiz-1", 1)).await.expect("create 4");

    let duplicate = repo.create(make_attempt("attempt-1", "user-a", "quiz-1", 2)).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let for_quiz = repo
        .find_by_student_and_quiz("user-a", "quiz-1")
        .await
        .expect("find_by_student_and_quiz");
    let ids: Vec<_> = for_quiz.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["attempt-2", "attempt-1"]);

    let history = repo.find_by_student("user-a").await.expect("find");
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].id, "attempt-3");
}

#[tokio::test]
async fn course_repository_lookup_by_ids() {
    let repo = InMemoryCourseRepository::default();

    let rust = Course::new("Rust", "Systems", "instructor-1");
    let go = Course::new("Go", "Services", "instructor-1");
    repo.create(rust.clone()).await.expect("create rust");
    repo.create(go.clone()).await.expect("create go");

    let found = repo
        .find_by_ids(&[rust.id.clone(), "missing".to_string()])
        .await
        .expect("find_by_ids");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, rust.id);

    assert!(repo.find_by_ids(&[]).await.expect("empty").is_empty());

    let ghost = repo.update(Course::new("Ghost", "", "nobody")).await;
    assert!(matches!(ghost, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn course_repository_catalog_and_owner_queries() {
    let repo = InMemoryCourseRepository::default();

    let mut algebra = Course::new("Intro to Algebra", "", "instructor-1");
    algebra.category = "Math".to_string();
    algebra.status = CourseStatus::Published;
    let mut draft = Course::new("Algebra II", "", "instructor-1");
    draft.category = "Math".to_string();
    let mut poems = Course::new("Poetry", "", "instructor-2");
    poems.category = "Literature".to_string();
    poems.status = CourseStatus::Published;
    for course in [&algebra, &draft, &poems] {
        repo.create(course.clone()).await.expect("create");
    }

    let all = repo.find_published(&CatalogFilter::default()).await.expect("catalog");
    assert_eq!(all.len(), 2);

    let filter = CatalogFilter {
        category: Some("Math".to_string()),
        search: Some("ALGEBRA".to_string()),
    };
    let math = repo.find_published(&filter).await.expect("catalog");
    assert_eq!(math.len(), 1);
    assert_eq!(math[0].id, algebra.id);

    let owned = repo.find_by_instructor("instructor-1").await.expect("owned");
    assert_eq!(owned.len(), 2);
    assert!(repo.find_by_instructor("nobody").await.expect("none").is_empty());
}

#[tokio::test]
async fn enrollment_repository_rejects_duplicate_pairs() {
    let repo = InMemoryEnrollmentRepository::default();

    repo.create(Enrollment::new("student-1", "course-1")).await.expect("enroll");
    repo.create(Enrollment::new("student-1", "course-2")).await.expect("enroll second course");

    let again = repo.create(Enrollment::new("student-1", "course-1")).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    assert!(repo.exists("student-1", "course-1").await.expect("exists"));
    assert!(!repo.exists("student-2", "course-1").await.expect("exists"));
    assert_eq!(repo.find_by_student("student-1").await.expect("find").len(), 2);
}
