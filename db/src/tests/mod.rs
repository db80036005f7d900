mod assignment_tests;
