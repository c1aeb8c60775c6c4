mod submit_form;
