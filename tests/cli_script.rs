use predicates::prelude::*;
use predicates::str::contains;

mod common;

#[test]
fn three_activities_show_two_of_three() {
    let input = "go activities\n\
                 add Groceries Food 100 50\n\
                 add Rent Housing 200 250\n\
                 add \"Bus pass\" Transport 300 300\n\
                 show\n\
                 exit\n";
    common::script_command(input)
        .assert()
        .success()
        .stdout(contains("2/3"))
        .stdout(contains("S/ 600.00"))
        .stdout(contains("Activity 'Bus pass' recorded."));
}

#[test]
fn deleting_past_the_end_warns_and_keeps_running() {
    let input = "go objects\n\
                 add A Food 10 5\n\
                 add B Food 10 20\n\
                 delete 6\n\
                 delete 1\n\
                 exit\n";
    common::script_command(input)
        .assert()
        .success()
        .stdout(contains("There is no object #6; the list has 2 item(s)."))
        .stdout(contains("Removed object #1: A."));
}

#[test]
fn blank_name_is_rejected_with_warning() {
    let input = "go activities\nadd \"   \" Food 10 5\nshow\n";
    common::script_command(input)
        .assert()
        .success()
        .stdout(contains("Enter the activity name."))
        .stdout(contains("No activities recorded yet"));
}

#[test]
fn projection_reports_negative_gain() {
    let input = "go returns\ncalc\nadd Deposit 1000\ncalc 5 12\n";
    common::script_command(input)
        .assert()
        .success()
        .stdout(contains("Add at least one activity to run the calculation."))
        .stdout(contains("S/ 600.00"))
        .stdout(contains("S/ -400.00"));
}

#[test]
fn budget_check_evaluate_and_reset() {
    let input = "go check\nevaluate\nset feb 100 150\nevaluate\nreset\n";
    common::script_command(input)
        .assert()
        .success()
        .stdout(contains("S/ 350.00"))
        .stdout(contains("Spend exceeds the budget."))
        .stdout(contains("S/ -50.00"))
        .stdout(contains("Budget check values reset."))
        .stdout(contains("S/ 500.00"));
}

#[test]
fn unknown_command_gets_a_suggestion() {
    common::script_command("shwo\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `shwo`"))
        .stdout(contains("Suggestion: `show`?"));
}

#[test]
fn currency_symbol_comes_from_config() {
    let input = "config set currency_symbol USD\ngo activities\nadd Rent Housing 1200 1000\n";
    common::script_command(input)
        .assert()
        .success()
        .stdout(contains("USD 1,200.00"))
        .stdout(contains("S/ 1,200.00").not());
}

#[test]
fn version_prints_build_metadata() {
    common::script_command("version\n")
        .assert()
        .success()
        .stdout(contains("Activity Budget"))
        .stdout(contains("Build hash"));
}

#[test]
fn help_reports_where_page_actions_apply() {
    let input = "go check\nhelp\nhelp calc\nexit\n";
    common::script_command(input)
        .assert()
        .success()
        .stdout(contains("On Exercise 1 - Budget check: Actions: set, evaluate, reset"))
        .stdout(contains("Pages: Exercise 3 - Expected returns"));
}

#[test]
fn budget_check_shows_difference_before_evaluate() {
    let input = "go check\nset mar 100 150\nexit\n";
    common::script_command(input)
        .assert()
        .success()
        .stdout(contains("Difference:"))
        .stdout(contains("S/ -50.00"))
        .stdout(contains("Run `evaluate`"));
}
